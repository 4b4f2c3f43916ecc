use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Vault Error: {0}")]
    Vault(#[from] VaultError),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("IO Error: {0}")]
    Io(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl WalletError {
    /// A derived scalar fell outside the curve order. The caller may retry
    /// with a different index; nothing else is worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WalletError::Crypto(CryptoError::InvalidChildKey { .. }))
    }

    /// Message shown to an end user. Every mnemonic problem collapses to the
    /// same phrase so the UI never hints which word was wrong.
    pub fn user_message(&self) -> String {
        match self {
            WalletError::Mnemonic(MnemonicError::EntropyUnavailable(_)) => {
                "secure random source unavailable".to_string()
            }
            WalletError::Mnemonic(_) => "invalid recovery phrase".to_string(),
            WalletError::Vault(VaultError::Locked) => "wallet is locked".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("Unsupported entropy length: {0} bytes.")]
    BadEntropyLength(usize),

    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Ed25519 SLIP-0010 requires every level to be hardened: {0}")]
    NonHardenedEd25519(String),

    #[error("Child index {0} is out of range (must be below 2^31)")]
    IndexOutOfRange(u32),

    #[error("Derived key at index {index:#x} is invalid, retry with the next index")]
    InvalidChildKey { index: u32 },

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VaultError {
    #[error("Vault is locked: no mnemonic loaded")]
    Locked,
}
