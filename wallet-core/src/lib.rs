// wallet-core/src/lib.rs

//! HD key-derivation core for a multi-chain wallet
//!
//! ```text
//! mnemonic ──PBKDF2──▶ seed ─┬─ BIP-32 secp256k1  m/44'/60'/0'/0/i  ──▶ 0x… (Ethereum)
//!                            └─ SLIP-0010 ed25519 m/44'/501'/i'/0'  ──▶ Base58 (Solana)
//! ```
//!
//! Pure derivation lives in [`crypto`] and [`chains`]; [`vault`] holds the
//! active phrase for a session; [`api`] is the flat surface a UI calls.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod vault;

pub use chains::{Chain, MultiChainAccount, WalletAccount};
pub use config::CoreConfig;
pub use crypto::{DerivationPath, DerivationPaths, Seed, WalletMnemonic, WordCount};
pub use error::{WalletError, WalletResult};
pub use vault::Vault;
