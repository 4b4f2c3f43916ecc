// Vault lifecycle as seen through the public API, including shared handles
// across threads and the async derivation helpers.

use hd_wallet_core::api::{derive_account_async, derive_sol_address, self_check};
use hd_wallet_core::error::VaultError;
use hd_wallet_core::{Chain, CoreConfig, Vault, WalletError, WordCount};
use std::thread;

const ABANDON_ABOUT: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
const LEGAL_WINNER: &str =
    "legal winner thank year wave sausage worth useful legal winner thank yellow";

#[test]
fn lock_then_get_returns_none() {
    let vault = Vault::default();
    vault.import(ABANDON_ABOUT).unwrap();
    vault.lock();
    assert!(vault.get_mnemonic().is_none());
    assert_eq!(vault.mnemonic().unwrap_err(), WalletError::Vault(VaultError::Locked));
}

#[test]
fn import_returns_exact_phrase() {
    let vault = Vault::default();
    vault.import(LEGAL_WINNER).unwrap();
    assert!(vault.is_unlocked());
    assert_eq!(vault.get_mnemonic().unwrap().phrase(), LEGAL_WINNER);
}

#[test]
fn invalid_import_keeps_prior_state() {
    let vault = Vault::default();

    // locked stays locked
    for bad in ["", "abandon", "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon"] {
        assert!(vault.import(bad).is_err());
        assert!(!vault.is_unlocked());
    }

    // unlocked keeps the old phrase
    vault.import(ABANDON_ABOUT).unwrap();
    assert!(vault.import("legal winner thank year wave sausage worth useful legal winner thank yellowx").is_err());
    assert_eq!(vault.get_mnemonic().unwrap().phrase(), ABANDON_ABOUT);
}

#[test]
fn import_replaces_active_phrase() {
    let vault = Vault::default();
    vault.import(ABANDON_ABOUT).unwrap();
    vault.import(LEGAL_WINNER).unwrap();
    assert_eq!(vault.get_mnemonic().unwrap().phrase(), LEGAL_WINNER);

    let created = vault.create_new().unwrap();
    assert_eq!(vault.get_mnemonic().unwrap(), created);
}

#[test]
fn create_new_honours_config() {
    let config = CoreConfig::from_toml_str("word_count = 18").unwrap();
    let vault = Vault::new(config);
    assert_eq!(vault.create_new().unwrap().word_count(), 18);
    assert_eq!(vault.config().word_count, WordCount::Eighteen);
}

#[test]
fn vault_derivation_matches_api() {
    let vault = Vault::default();
    vault.import(ABANDON_ABOUT).unwrap();
    let account = vault.derive_account(Chain::Solana, 4).unwrap();
    assert_eq!(account.index, 4);
    assert_eq!(account.address, derive_sol_address(ABANDON_ABOUT, 4).unwrap());
}

#[test]
fn concurrent_lock_and_read_never_tears() {
    let vault = Vault::default();
    vault.import(ABANDON_ABOUT).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let vault = vault.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    if let Some(m) = vault.get_mnemonic() {
                        assert_eq!(m.phrase(), ABANDON_ABOUT);
                    }
                }
            })
        })
        .collect();

    let writer = {
        let vault = vault.clone();
        thread::spawn(move || {
            for _ in 0..500 {
                vault.lock();
                vault.import(ABANDON_ABOUT).unwrap();
            }
        })
    };

    for handle in readers {
        handle.join().unwrap();
    }
    writer.join().unwrap();
    assert!(vault.is_unlocked());
}

#[test]
fn self_check_leaves_vault_unlocked() {
    let vault = Vault::default();
    vault.import(ABANDON_ABOUT).unwrap();
    let report = self_check(&vault).unwrap();
    assert_ne!(vault.get_mnemonic().unwrap().phrase(), ABANDON_ABOUT);
    assert_eq!(report.accounts.len(), 1);
}

#[tokio::test]
async fn async_derivation_from_many_tasks() {
    let tasks: Vec<_> = (0..4u32)
        .map(|i| tokio::spawn(derive_account_async(ABANDON_ABOUT.to_string(), Chain::Ethereum, i)))
        .collect();

    let mut addresses = Vec::new();
    for task in tasks {
        addresses.push(task.await.unwrap().unwrap().address);
    }
    assert_eq!(addresses[0], "0x9858effd232b4033e47d90003d41ec34ecaeda94");
    addresses.sort();
    addresses.dedup();
    assert_eq!(addresses.len(), 4);
}

#[tokio::test]
async fn async_derivation_propagates_errors() {
    let err = derive_account_async("not a phrase".to_string(), Chain::Solana, 0)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "invalid recovery phrase");
}
