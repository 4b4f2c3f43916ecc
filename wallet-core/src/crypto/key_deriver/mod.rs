// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  └─ EVM                    └─ Solana            │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::{ExtendedPrivateKey, Secp256k1Deriver};

use crate::crypto::paths::DerivationPath;
use crate::crypto::seed::SEED_LEN;
use crate::error::{CryptoError, WalletResult};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Curve used for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// secp256k1 - Ethereum / EVM
    Secp256k1,
    /// Ed25519 - Solana
    Ed25519,
}

/// Derivation result: private key + metadata
pub struct DerivedKey {
    /// Private key bytes (32 bytes, zeroized on drop)
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    pub path: DerivationPath,
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("private_key", &"[REDACTED]")
            .field("curve", &self.curve)
            .field("path", &self.path.to_string())
            .finish()
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Unified Key Deriver - entry point for every curve
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive a key on the given curve
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g. `m/44'/60'/0'/0/0`)
    /// * `curve` - Curve type
    pub fn derive(seed: &[u8], path: &DerivationPath, curve: CurveType) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.clone(),
        })
    }

    /// Seeds must be exactly 64 bytes; checked before any HMAC runs
    #[inline]
    pub fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(CryptoError::InvalidSeedLength {
                expected: SEED_LEN,
                actual: seed.len(),
            }
            .into());
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;
    use crate::error::WalletError;

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    fn path(s: &str) -> DerivationPath {
        s.parse().unwrap()
    }

    #[test]
    fn test_unified_secp256k1() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = KeyDeriver::derive(&seed, &path(DerivationPaths::EVM_0), CurveType::Secp256k1).unwrap();
        assert_eq!(key.curve, CurveType::Secp256k1);
        assert_eq!(key.path.to_string(), DerivationPaths::EVM_0);
    }

    #[test]
    fn test_unified_ed25519() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = KeyDeriver::derive(&seed, &path(DerivationPaths::SOLANA_0), CurveType::Ed25519).unwrap();
        assert_eq!(key.curve, CurveType::Ed25519);
        assert_eq!(key.private_key.len(), 32);
    }

    #[test]
    fn test_invalid_seed() {
        let result = KeyDeriver::derive(&[0u8; 32], &path(DerivationPaths::EVM_0), CurveType::Secp256k1);
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::InvalidSeedLength { expected: 64, actual: 32 }))
        ));
        let result = KeyDeriver::derive(&[0u8; 65], &path(DerivationPaths::SOLANA_0), CurveType::Ed25519);
        assert!(result.is_err());
    }

    #[test]
    fn test_different_curves_produce_different_keys() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let secp = KeyDeriver::derive(&seed, &path("m/44'/60'/0'/0'"), CurveType::Secp256k1).unwrap();
        let ed = KeyDeriver::derive(&seed, &path("m/44'/60'/0'/0'"), CurveType::Ed25519).unwrap();
        assert_ne!(&*secp.private_key, &*ed.private_key);
    }

    #[test]
    fn test_debug_redacts_key() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = KeyDeriver::derive(&seed, &path(DerivationPaths::SOLANA_0), CurveType::Ed25519).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&hex::encode(*key.private_key)));
    }
}
