// wallet-core/src/config.rs
//
// Core configuration, loaded from TOML

use crate::crypto::mnemonic::WordCount;
use crate::crypto::paths::HARDENED_OFFSET;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime knobs for the vault and the verification binary.
///
/// ```toml
/// word_count = 24
/// default_account_index = 0
/// initial_accounts = 3
/// log_filter = "hd_wallet_core=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Length of phrases produced by `Vault::create_new`
    pub word_count: WordCount,
    pub default_account_index: u32,
    /// Accounts listed by the self check, starting at `default_account_index`
    pub initial_accounts: u32,
    pub log_filter: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            word_count: WordCount::default(),
            default_account_index: 0,
            initial_accounts: 1,
            log_filter: "info".to_string(),
        }
    }
}

impl CoreConfig {
    pub fn from_toml_str(s: &str) -> WalletResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| WalletError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| WalletError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> WalletResult<()> {
        if self.default_account_index >= HARDENED_OFFSET {
            return Err(WalletError::Config(format!(
                "default_account_index {} must be below 2^31",
                self.default_account_index
            )));
        }
        if self.initial_accounts == 0 {
            return Err(WalletError::Config(
                "initial_accounts must be at least 1".to_string(),
            ));
        }
        let last = u64::from(self.default_account_index) + u64::from(self.initial_accounts) - 1;
        if last >= u64::from(HARDENED_OFFSET) {
            return Err(WalletError::Config(format!(
                "account range ends at {}, beyond the last non-hardened index",
                last
            )));
        }
        Ok(())
    }

    /// Account indices covered by `initial_accounts`
    ///
    /// Saturates at `u32::MAX` for a config that skipped `validate`.
    pub fn account_indices(&self) -> std::ops::Range<u32> {
        self.default_account_index..self.default_account_index.saturating_add(self.initial_accounts)
    }
}
