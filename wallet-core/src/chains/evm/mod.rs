// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! Address derivation for Ethereum and EVM-compatible chains, which all
//! share the secp256k1 / Keccak-256 account format, via [`EvmAddress`].

pub mod address;

pub use address::EvmAddress;
