// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Everything between a recovery phrase and a 32-byte chain private key:
//!
//! - **Mnemonic**: BIP-39 phrases (12 to 24 words) via [`WalletMnemonic`].
//! - **Seed**: PBKDF2 stretch of the phrase via [`derive_seed`].
//! - **Key Derivation**: secp256k1 (BIP-32, EVM) and Ed25519 (SLIP-0010, Solana) via [`KeyDeriver`].
//! - **Derivation Paths**: typed BIP-44 / SLIP-0010 paths via [`DerivationPaths`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;
pub mod seed;

// Re-exports for cleaner API access
pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::{ChildIndex, DerivationPath, DerivationPaths};
pub use seed::{derive_seed, Seed};
