// wallet-core/src/api/mod.rs

//! Host-facing surface
//!
//! Plain functions over strings and integers for a UI layer. Every phrase
//! argument is validated on each call; nothing here keeps state except the
//! [`Vault`] passed to [`self_check`].

use crate::chains::{Chain, EvmAddress, MultiChainAccount, SolanaAddress, WalletAccount};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::paths::HARDENED_OFFSET;
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::vault::Vault;
use serde::Serialize;
use tracing::{info, instrument};

// =============================================================================
// MNEMONIC
// =============================================================================

/// Fresh 12-word English phrase from the OS random source
pub fn generate_mnemonic() -> WalletResult<String> {
    let mnemonic = WalletMnemonic::generate_default()?;
    Ok(mnemonic.phrase().to_string())
}

/// `true` iff the phrase has a supported length, only word-list words and
/// a matching checksum
pub fn validate_mnemonic(phrase: &str) -> bool {
    WalletMnemonic::validate(phrase)
}

// =============================================================================
// DERIVATION
// =============================================================================

/// Lowercase `0x` address at `m/44'/60'/0'/0/{account_index}`
pub fn derive_eth_address(mnemonic: &str, account_index: u32) -> WalletResult<String> {
    derive_account(mnemonic, Chain::Ethereum, account_index).map(|a| a.address)
}

/// Base58 address at `m/44'/501'/{account_index}'/0'`
pub fn derive_sol_address(mnemonic: &str, account_index: u32) -> WalletResult<String> {
    derive_account(mnemonic, Chain::Solana, account_index).map(|a| a.address)
}

pub fn derive_account(
    mnemonic: &str,
    chain: Chain,
    account_index: u32,
) -> WalletResult<WalletAccount> {
    let mnemonic = WalletMnemonic::from_phrase(mnemonic)?;
    let seed = mnemonic.to_seed(None)?;
    chain.derive_address(&seed, account_index)
}

/// Both chain addresses for each index, stretching the seed once
pub fn derive_accounts(mnemonic: &str, indices: &[u32]) -> WalletResult<Vec<MultiChainAccount>> {
    let mnemonic = WalletMnemonic::from_phrase(mnemonic)?;
    let seed = mnemonic.to_seed(None)?;
    indices
        .iter()
        .map(|&index| MultiChainAccount::derive(&seed, index))
        .collect()
}

/// Index for a newly added account: one past the last listed, 0 for none
pub fn next_account_index(accounts: &[MultiChainAccount]) -> WalletResult<u32> {
    let next = match accounts.last() {
        Some(last) => last.index.saturating_add(1),
        None => 0,
    };
    if next >= HARDENED_OFFSET {
        return Err(CryptoError::IndexOutOfRange(next).into());
    }
    Ok(next)
}

// =============================================================================
// ASYNC
// =============================================================================
// The PBKDF2 stretch is CPU-bound, so it runs on the blocking pool instead
// of an async worker. Dropping the future does not stop the computation.

pub async fn derive_sol_address_async(mnemonic: String, account_index: u32) -> WalletResult<String> {
    derive_account_async(mnemonic, Chain::Solana, account_index)
        .await
        .map(|a| a.address)
}

pub async fn derive_account_async(
    mnemonic: String,
    chain: Chain,
    account_index: u32,
) -> WalletResult<WalletAccount> {
    tokio::task::spawn_blocking(move || {
        let mnemonic = zeroize::Zeroizing::new(mnemonic);
        derive_account(&mnemonic, chain, account_index)
    })
    .await
    .map_err(|e| WalletError::Unknown(format!("derivation task failed: {}", e)))?
}

// =============================================================================
// ADDRESS VALIDATION
// =============================================================================

pub fn validate_eth_address(address: &str) -> bool {
    EvmAddress::is_valid(address)
}

pub fn validate_sol_address(address: &str) -> bool {
    SolanaAddress::is_valid(address)
}

// =============================================================================
// SELF CHECK
// =============================================================================

/// Outcome of [`self_check`]. Holds addresses only, never the phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfCheckReport {
    pub word_count: usize,
    pub eth_address: String,
    pub sol_address: String,
    pub accounts: Vec<MultiChainAccount>,
}

/// End-to-end smoke test: generate a phrase, import it into `vault`,
/// derive both chains and validate the results.
///
/// Leaves `vault` unlocked with the generated phrase, replacing whatever
/// it held before.
#[instrument(skip(vault))]
pub fn self_check(vault: &Vault) -> WalletResult<SelfCheckReport> {
    let phrase = zeroize::Zeroizing::new(generate_mnemonic()?);
    let word_count = phrase.split_whitespace().count();
    info!(word_count, "mnemonic generation: ok");

    vault.import(&phrase)?;
    if !vault.is_unlocked() {
        return Err(WalletError::Validation("vault failed to unlock".to_string()));
    }
    info!("vault unlock: ok");

    let index = vault.config().default_account_index;
    let eth_address = vault.derive_account(Chain::Ethereum, index)?.address;
    if !validate_eth_address(&eth_address) {
        return Err(WalletError::Validation(format!(
            "derived invalid ETH address: {}",
            eth_address
        )));
    }
    info!(%eth_address, "ethereum derivation: ok");

    let sol_address = vault.derive_account(Chain::Solana, index)?.address;
    if !validate_sol_address(&sol_address) {
        return Err(WalletError::Validation(format!(
            "derived invalid SOL address: {}",
            sol_address
        )));
    }
    info!(%sol_address, "solana derivation: ok");

    let accounts = vault.initial_accounts()?;

    Ok(SelfCheckReport {
        word_count,
        eth_address,
        sol_address,
        accounts,
    })
}

// =============================================================================
// TESTS
// =============================================================================
