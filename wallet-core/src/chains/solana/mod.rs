// wallet-core/src/chains/solana/mod.rs

//! Solana Chain Support
//!
//! Ed25519 public keys double as account addresses, rendered in Base58,
//! via [`SolanaAddress`].

pub mod address;

pub use address::SolanaAddress;
