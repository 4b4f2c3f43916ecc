// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44
//
// Used for: Ethereum / EVM
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::paths::{ChildIndex, DerivationPath};
use crate::crypto::seed::SEED_LEN;
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, XPrv};
use zeroize::Zeroizing;

/// BIP-32 extended private key: scalar `k` plus 32-byte chain code.
///
/// Lives only for the duration of one derivation.
#[derive(Clone)]
pub struct ExtendedPrivateKey(XPrv);

impl std::fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("depth", &self.0.attrs().depth)
            .finish_non_exhaustive()
    }
}

impl ExtendedPrivateKey {
    /// Master key from a seed.
    ///
    /// I = HMAC-SHA512(Key = "Bitcoin seed", Data = seed)
    /// IL = master secret (must be in [1, n)), IR = master chain code
    pub fn master(seed: &[u8]) -> WalletResult<Self> {
        XPrv::new(seed).map(Self).map_err(|e| match e {
            bip32::Error::SeedLength => WalletError::Crypto(CryptoError::InvalidSeedLength {
                expected: SEED_LEN,
                actual: seed.len(),
            }),
            other => map_bip32_error(other, 0),
        })
    }

    /// CKDpriv for one child.
    ///
    /// hardened: Data = 0x00 || ser256(k_par) || ser32(i)
    /// normal:   Data = serP(K_par) || ser32(i)
    /// k_child = IL + k_par (mod n)
    pub fn derive_child(&self, child: ChildIndex) -> WalletResult<Self> {
        self.0
            .derive_child(ChildNumber(child.raw()))
            .map(Self)
            .map_err(|e| map_bip32_error(e, child.raw()))
    }

    /// Walk every segment of `path` starting from this key
    pub fn derive_path(&self, path: &DerivationPath) -> WalletResult<Self> {
        let mut current = self.clone();
        for child in path {
            current = current.derive_child(*child)?;
        }
        Ok(current)
    }

    /// ser256(k)
    pub fn private_key_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.0.private_key().to_bytes().into())
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.0.attrs().chain_code
    }

    /// serP(K): 33-byte SEC1 compressed point
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.0.public_key().to_bytes()
    }
}

/// `IL >= n` or a zero child key surfaces from `bip32` as `Error::Crypto`;
/// that index is unusable and the caller may pick another.
fn map_bip32_error(err: bip32::Error, index: u32) -> WalletError {
    match err {
        bip32::Error::Crypto => WalletError::Crypto(CryptoError::InvalidChildKey { index }),
        other => WalletError::Crypto(CryptoError::DerivationFailed(format!(
            "BIP-32 derivation failed at index {}: {}",
            index, other
        ))),
    }
}

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// # Security
/// - Private keys wrap in `Zeroizing<[u8; 32]>`
/// - No intermediate keys are kept after the call returns
///
/// # Performance
/// - Iterative derivation (no recursion)
/// - Batch derivation walks the base path once, then fans out
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive a single private key from seed + path
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `path` - e.g. `m/44'/60'/0'/0/0`
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        let child = ExtendedPrivateKey::master(seed)?.derive_path(path)?;
        Ok(child.private_key_bytes())
    }

    /// Batch derive: walk to `base_path` once, then derive each normal child
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `base_path` - Path up to the last level (e.g. `m/44'/60'/0'/0`)
    /// * `indices` - Range of address indices (e.g. 0..10)
    pub fn derive_batch(
        seed: &[u8],
        base_path: &DerivationPath,
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<Zeroizing<[u8; 32]>>> {
        let base = ExtendedPrivateKey::master(seed)?.derive_path(base_path)?;

        let mut keys = Vec::with_capacity(indices.len());
        for index in indices {
            let child = base.derive_child(ChildIndex::normal(index)?)?;
            keys.push(child.private_key_bytes());
        }

        Ok(keys)
    }
}

// =============================================================================
// TESTS
// =============================================================================
