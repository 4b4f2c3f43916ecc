// wallet-core/src/crypto/seed.rs
//
// BIP-39 seed: PBKDF2-HMAC-SHA512, 2048 rounds, salt = "mnemonic" || passphrase

use crate::crypto::mnemonic::WalletMnemonic;
use crate::error::{CryptoError, WalletResult};
use zeroize::Zeroizing;

/// Seed length required by every deriver in this crate
pub const SEED_LEN: usize = 64;

/// 64-byte root secret for all chains, wiped on drop.
#[derive(Clone)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

impl Seed {
    /// Wrap raw seed bytes, rejecting anything that is not exactly 64 bytes
    pub fn from_slice(bytes: &[u8]) -> WalletResult<Self> {
        let arr: [u8; SEED_LEN] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidSeedLength {
                    expected: SEED_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(Zeroizing::new(arr)))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

/// Stretch a validated mnemonic into its BIP-39 seed.
///
/// Deterministic in `(mnemonic, passphrase)` and deliberately slow. The
/// passphrase is NFKD-normalized before use, as every BIP-39 wallet does.
/// Callers recompute this per operation instead of keeping the seed around.
pub fn derive_seed(mnemonic: &WalletMnemonic, passphrase: &str) -> WalletResult<Seed> {
    let parsed = mnemonic.as_bip39()?;
    Ok(Seed(Zeroizing::new(parsed.to_seed(passphrase))))
}
