// wallet-core/src/chains/solana/address.rs
//
// Solana Address Module - Ed25519 public key, Base58 (Bitcoin alphabet)

use crate::crypto::key_deriver::Ed25519Deriver;

/// Solana public key length in bytes
pub const PUBKEY_LEN: usize = 32;

/// Solana Address Generator
///
/// # Flow:  Private Key Seed (32B) → Ed25519 Public Key (32B) → Base58
///
/// The 32 derived bytes are the Ed25519 signing seed, not a clamped
/// scalar, which is what every Solana keypair tool expects.
pub struct SolanaAddress;

impl SolanaAddress {
    /// Raw 32-byte account key
    #[inline]
    pub fn derive_bytes(priv_key: &[u8; 32]) -> [u8; PUBKEY_LEN] {
        Ed25519Deriver::public_key(priv_key)
    }

    /// Base58 account address, 32 to 44 characters
    pub fn derive(priv_key: &[u8; 32]) -> String {
        bs58::encode(Self::derive_bytes(priv_key)).into_string()
    }

    /// Base58 string that decodes to exactly 32 bytes
    pub fn is_valid(address: &str) -> bool {
        matches!(
            bs58::decode(address).into_vec(),
            Ok(bytes) if bytes.len() == PUBKEY_LEN
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
