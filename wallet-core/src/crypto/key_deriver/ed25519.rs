// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010 Standard
//
// Used for: Solana
// Algorithm: HMAC-SHA512 (unlike BIP-32, hardened derivation only)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// IMPORTANT: SLIP-0010 for ed25519 ONLY supports hardened child derivation.
// Every level in the path MUST be hardened.
// e.g. m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::crypto::paths::{DerivationPath, HARDENED_OFFSET};
use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Ed25519 Key Deriver - SLIP-0010 Standard
///
/// # Differences from secp256k1 (BIP-32)
/// - Master key secret: "ed25519 seed" (instead of "Bitcoin seed")
/// - Hardened derivation only (index >= 2^31)
/// - No curve arithmetic between levels: any 32 bytes are a valid key
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive a single ed25519 private key (the 32-byte Ed25519 seed)
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `path` - every level hardened, e.g. `m/44'/501'/0'/0'`
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        Self::check_hardened(path)?;

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::master_key_generate(seed)?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || index)
        for child in path {
            let (child_key, child_chain) = Self::child_key_derive(&key, &chain_code, child.index())?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();

        Ok(Zeroizing::new(key))
    }

    /// Public key for a derived private key
    pub fn public_key(private_key: &[u8; 32]) -> [u8; 32] {
        SigningKey::from_bytes(private_key).verifying_key().to_bytes()
    }

    fn check_hardened(path: &DerivationPath) -> WalletResult<()> {
        match path.iter().find(|c| !c.is_hardened()) {
            Some(segment) => Err(WalletError::Crypto(CryptoError::NonHardenedEd25519(
                format!("segment '{}' in {}", segment, path),
            ))),
            None => Ok(()),
        }
    }

    /// IL (32 bytes) = private key, IR (32 bytes) = chain code
    fn master_key_generate(seed: &[u8]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(Self::MASTER_SECRET).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;

        mac.update(seed);
        Ok(Self::split(mac))
    }

    /// Data = 0x00 || parent_key || ser32(index + 0x80000000)
    fn child_key_derive(
        parent_key: &[u8; 32],
        parent_chain_code: &[u8; 32],
        index: u32,
    ) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(parent_chain_code).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;

        let hardened_index = index | HARDENED_OFFSET;
        mac.update(&[0x00]);
        mac.update(parent_key);
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::split(mac))
    }

    fn split(mac: HmacSha512) -> ([u8; 32], [u8; 32]) {
        let result = mac.finalize().into_bytes();

        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        buf.zeroize();

        (key, chain_code)
    }

    /// Validate an ed25519 path (every level hardened)
    pub fn is_valid_path(path: &DerivationPath) -> bool {
        Self::check_hardened(path).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
