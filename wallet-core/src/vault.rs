// wallet-core/src/vault.rs
//
// Session Vault - holds the active mnemonic in memory while the wallet is unlocked
//
//   LOCKED ──create_new / import(valid)──▶ UNLOCKED
//   UNLOCKED ──create_new / import(valid)──▶ UNLOCKED (phrase replaced)
//   any ──lock──▶ LOCKED
//
// Nothing here touches disk; dropping the last handle wipes the phrase.

use crate::chains::{Chain, MultiChainAccount, WalletAccount};
use crate::config::CoreConfig;
use crate::crypto::mnemonic::WalletMnemonic;
use crate::error::{VaultError, WalletResult};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Cloneable handle to one wallet session.
///
/// Clones share the same slot. Every read and write goes through one mutex,
/// so `lock()` racing `get_mnemonic()` sees either the full phrase or none.
#[derive(Clone, Default)]
pub struct Vault {
    slot: Arc<Mutex<Option<WalletMnemonic>>>,
    config: CoreConfig,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("unlocked", &self.is_unlocked())
            .field("config", &self.config)
            .finish()
    }
}

impl Vault {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            config,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    // =========================================================================
    // STATE TRANSITIONS
    // =========================================================================

    /// Generate a fresh phrase of the configured length and make it active.
    ///
    /// Returns the phrase so the caller can show it for backup.
    pub fn create_new(&self) -> WalletResult<WalletMnemonic> {
        let mnemonic = WalletMnemonic::generate(self.config.word_count)?;
        let replaced = self.slot.lock().replace(mnemonic.clone()).is_some();
        info!(
            word_count = mnemonic.word_count(),
            replaced, "vault unlocked with new mnemonic"
        );
        Ok(mnemonic)
    }

    /// Validate `phrase` and make it active. A rejected phrase leaves the
    /// current state untouched.
    pub fn import(&self, phrase: &str) -> WalletResult<()> {
        // the error may quote a word from the phrase, so it is not logged
        let mnemonic = WalletMnemonic::from_phrase(phrase).map_err(|e| {
            warn!("mnemonic import rejected");
            e
        })?;
        let word_count = mnemonic.word_count();
        let replaced = self.slot.lock().replace(mnemonic).is_some();
        info!(word_count, replaced, "vault unlocked with imported mnemonic");
        Ok(())
    }

    /// Drop the active phrase. Always succeeds, also when already locked.
    pub fn lock(&self) {
        let previous = self.slot.lock().take();
        if previous.is_some() {
            info!("vault locked");
        }
        // `previous` is wiped here, outside the critical section
    }

    pub fn is_unlocked(&self) -> bool {
        self.slot.lock().is_some()
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    /// Copy of the active phrase, `None` when locked
    pub fn get_mnemonic(&self) -> Option<WalletMnemonic> {
        self.slot.lock().clone()
    }

    /// Copy of the active phrase, `VaultError::Locked` when locked
    pub fn mnemonic(&self) -> WalletResult<WalletMnemonic> {
        self.get_mnemonic().ok_or_else(|| VaultError::Locked.into())
    }

    /// Derive one account from the active phrase.
    ///
    /// The phrase is cloned under the mutex and the slow seed stretch runs
    /// after it is released. The seed is dropped before returning.
    pub fn derive_account(&self, chain: Chain, account_index: u32) -> WalletResult<WalletAccount> {
        let mnemonic = self.mnemonic()?;
        debug!(%chain, account_index, "vault derive");
        let seed = mnemonic.to_seed(None)?;
        chain.derive_address(&seed, account_index)
    }

    /// Ethereum and Solana addresses for one account index
    pub fn derive_multi_chain(&self, account_index: u32) -> WalletResult<MultiChainAccount> {
        let mnemonic = self.mnemonic()?;
        let seed = mnemonic.to_seed(None)?;
        MultiChainAccount::derive(&seed, account_index)
    }

    /// Accounts for the configured `initial_accounts` range, sharing one seed
    pub fn initial_accounts(&self) -> WalletResult<Vec<MultiChainAccount>> {
        self.config.validate()?;
        let mnemonic = self.mnemonic()?;
        let seed = mnemonic.to_seed(None)?;
        self.config
            .account_indices()
            .map(|index| MultiChainAccount::derive(&seed, index))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
