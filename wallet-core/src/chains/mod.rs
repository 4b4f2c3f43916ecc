// wallet-core/src/chains/mod.rs

//! Supported chains and their address formats
//!
//! Each chain pairs a curve, a derivation path shape and an address
//! encoding. Those three facts live in one [`AddressScheme`] impl per chain;
//! [`Chain`] is the closed set of schemes the wallet exposes.

pub mod evm;
pub mod solana;

pub use evm::EvmAddress;
pub use solana::SolanaAddress;

use crate::crypto::key_deriver::{CurveType, KeyDeriver};
use crate::crypto::paths::{DerivationPath, DerivationPaths};
use crate::crypto::seed::Seed;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// ADDRESS SCHEME
// =============================================================================

/// How one chain turns a seed + account index into an address
pub trait AddressScheme {
    const CURVE: CurveType;

    /// Derivation path for the given account index
    fn path(account_index: u32) -> WalletResult<DerivationPath>;

    /// Address for a derived 32-byte private key
    fn encode(private_key: &[u8; 32]) -> WalletResult<String>;

    /// Syntactic validity of an address string
    fn is_valid(address: &str) -> bool;
}

impl AddressScheme for EvmAddress {
    const CURVE: CurveType = CurveType::Secp256k1;

    fn path(account_index: u32) -> WalletResult<DerivationPath> {
        DerivationPaths::evm(account_index)
    }

    fn encode(private_key: &[u8; 32]) -> WalletResult<String> {
        EvmAddress::derive(private_key)
    }

    fn is_valid(address: &str) -> bool {
        EvmAddress::is_valid(address)
    }
}

impl AddressScheme for SolanaAddress {
    const CURVE: CurveType = CurveType::Ed25519;

    fn path(account_index: u32) -> WalletResult<DerivationPath> {
        DerivationPaths::solana(account_index)
    }

    fn encode(private_key: &[u8; 32]) -> WalletResult<String> {
        Ok(SolanaAddress::derive(private_key))
    }

    fn is_valid(address: &str) -> bool {
        SolanaAddress::is_valid(address)
    }
}

fn derive_with<S: AddressScheme>(seed: &Seed, account_index: u32) -> WalletResult<String> {
    let path = S::path(account_index)?;
    let key = KeyDeriver::derive(seed.as_ref(), &path, S::CURVE)?;
    S::encode(&key.private_key)
}

// =============================================================================
// CHAIN
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Solana,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Ethereum, Chain::Solana];

    pub fn curve(self) -> CurveType {
        match self {
            Chain::Ethereum => EvmAddress::CURVE,
            Chain::Solana => SolanaAddress::CURVE,
        }
    }

    pub fn path(self, account_index: u32) -> WalletResult<DerivationPath> {
        match self {
            Chain::Ethereum => EvmAddress::path(account_index),
            Chain::Solana => SolanaAddress::path(account_index),
        }
    }

    pub fn is_valid_address(self, address: &str) -> bool {
        match self {
            Chain::Ethereum => EvmAddress::is_valid(address),
            Chain::Solana => SolanaAddress::is_valid(address),
        }
    }

    /// Derive this chain's account at `account_index` from a BIP-39 seed
    pub fn derive_address(self, seed: &Seed, account_index: u32) -> WalletResult<WalletAccount> {
        let address = match self {
            Chain::Ethereum => derive_with::<EvmAddress>(seed, account_index)?,
            Chain::Solana => derive_with::<SolanaAddress>(seed, account_index)?,
        };

        debug!(chain = %self, account_index, %address, "derived address");

        Ok(WalletAccount {
            index: account_index,
            chain: self,
            address,
            name: None,
        })
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Ethereum => f.write_str("ethereum"),
            Chain::Solana => f.write_str("solana"),
        }
    }
}

impl FromStr for Chain {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ethereum" | "eth" | "evm" => Ok(Chain::Ethereum),
            "solana" | "sol" => Ok(Chain::Solana),
            other => Err(WalletError::Validation(format!("Unsupported chain: {}", other))),
        }
    }
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// One derived address on one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub index: u32,
    pub chain: Chain,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WalletAccount {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Both chain addresses sharing one account index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiChainAccount {
    pub index: u32,
    pub eth_address: String,
    pub sol_address: String,
}

impl MultiChainAccount {
    pub fn derive(seed: &Seed, account_index: u32) -> WalletResult<Self> {
        let eth = Chain::Ethereum.derive_address(seed, account_index)?;
        let sol = Chain::Solana.derive_address(seed, account_index)?;
        Ok(Self {
            index: account_index,
            eth_address: eth.address,
            sol_address: sol.address,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
