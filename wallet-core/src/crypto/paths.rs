// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - typed BIP-32 paths + chain presets
// BIP-44 (Purpose), SLIP-44 (Coin Types), SLIP-0010 (ed25519, all hardened)

use crate::error::{CryptoError, WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

/// Raw-index offset marking a hardened child (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const ETHEREUM: u32 = 60;
    pub const SOLANA: u32 = 501;
}

/// BIP-44 purpose level
pub const PURPOSE_BIP44: u32 = 44;

// =============================================================================
// CHILD INDEX
// =============================================================================

/// One path segment: a 31-bit index plus the hardened flag.
///
/// The index itself must stay below 2^31; values at or above it are
/// rejected rather than wrapped into the hardened range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex {
    index: u32,
    hardened: bool,
}

impl ChildIndex {
    pub fn new(index: u32, hardened: bool) -> WalletResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::Crypto(CryptoError::IndexOutOfRange(index)));
        }
        Ok(Self { index, hardened })
    }

    #[inline]
    pub fn hardened(index: u32) -> WalletResult<Self> {
        Self::new(index, true)
    }

    #[inline]
    pub fn normal(index: u32) -> WalletResult<Self> {
        Self::new(index, false)
    }

    /// Decode a raw `ser32` value (bit 31 = hardened)
    pub fn from_raw(raw: u32) -> Self {
        Self {
            index: raw & !HARDENED_OFFSET,
            hardened: raw & HARDENED_OFFSET != 0,
        }
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub fn is_hardened(self) -> bool {
        self.hardened
    }

    /// Value fed to HMAC as `ser32(i)`
    #[inline]
    pub fn raw(self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

impl FromStr for ChildIndex {
    type Err = WalletError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let segment = segment.trim();
        let (digits, hardened) = match segment.strip_suffix(&['\'', 'h', 'H'][..]) {
            Some(stripped) => (stripped, true),
            None => (segment, false),
        };

        let index: u32 = digits.parse().map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidPath(format!(
                "Invalid index '{}': {}",
                segment, e
            )))
        })?;

        Self::new(index, hardened)
    }
}

// =============================================================================
// DERIVATION PATH
// =============================================================================

/// Ordered list of child indices below the master key (`m/...`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath(Vec<ChildIndex>);

impl DerivationPath {
    pub fn new(segments: Vec<ChildIndex>) -> Self {
        Self(segments)
    }

    /// Empty path, i.e. the master key itself
    pub fn master() -> Self {
        Self::default()
    }

    pub fn push(&mut self, child: ChildIndex) {
        self.0.push(child);
    }

    /// Copy of this path with one more segment
    pub fn child(&self, child: ChildIndex) -> Self {
        let mut path = self.clone();
        path.push(child);
        path
    }

    pub fn segments(&self) -> &[ChildIndex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChildIndex> {
        self.0.iter()
    }

    /// True when every segment is hardened (required by SLIP-0010 ed25519)
    pub fn all_hardened(&self) -> bool {
        self.0.iter().all(|c| c.is_hardened())
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildIndex;
    type IntoIter = std::slice::Iter<'a, ChildIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for child in &self.0 {
            write!(f, "/{}", child)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    /// Parses `m`, `m/44'/60'/0'/0/0`, `m/44h/501h/0h/0h`
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim();
        let rest = match path.strip_prefix('m') {
            Some(rest) => rest,
            None => {
                return Err(WalletError::Crypto(CryptoError::InvalidPath(format!(
                    "Path must start with 'm': {}",
                    path
                ))))
            }
        };

        if rest.is_empty() {
            return Ok(Self::master());
        }

        let rest = rest.strip_prefix('/').ok_or_else(|| {
            WalletError::Crypto(CryptoError::InvalidPath(format!(
                "Expected '/' after 'm': {}",
                path
            )))
        })?;

        rest.split('/')
            .map(ChildIndex::from_str)
            .collect::<WalletResult<Vec<_>>>()
            .map(Self)
    }
}

// =============================================================================
// CHAIN PRESETS
// =============================================================================

/// Pre-built paths for the supported chains
///
/// # Conventions
/// - EVM (secp256k1, BIP-44): `m/44'/60'/0'/0/account`
/// - Solana (ed25519, SLIP-0010): `m/44'/501'/account'/0'`
pub struct DerivationPaths;

impl DerivationPaths {
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    /// `m/44'/60'/0'/0`, the external chain every EVM account hangs off
    pub fn evm_base() -> DerivationPath {
        DerivationPath(vec![
            ChildIndex::from_raw(PURPOSE_BIP44 | HARDENED_OFFSET),
            ChildIndex::from_raw(coin_type::ETHEREUM | HARDENED_OFFSET),
            ChildIndex::from_raw(HARDENED_OFFSET),
            ChildIndex::from_raw(0),
        ])
    }

    /// `m/44'/60'/0'/0/{account_index}`, the last level non-hardened
    pub fn evm(account_index: u32) -> WalletResult<DerivationPath> {
        Ok(Self::evm_base().child(ChildIndex::normal(account_index)?))
    }

    /// `m/44'/501'/{account_index}'/0'`, every level hardened
    pub fn solana(account_index: u32) -> WalletResult<DerivationPath> {
        Self::ed25519_path(coin_type::SOLANA, account_index, &[0])
    }

    /// SLIP-0010 path `m/44'/coin'/account'/sub...'`, all hardened
    pub fn ed25519_path(
        coin_type: u32,
        account: u32,
        sub_paths: &[u32],
    ) -> WalletResult<DerivationPath> {
        let mut path = DerivationPath(vec![
            ChildIndex::hardened(PURPOSE_BIP44)?,
            ChildIndex::hardened(coin_type)?,
            ChildIndex::hardened(account)?,
        ]);
        for &idx in sub_paths {
            path.push(ChildIndex::hardened(idx)?);
        }
        Ok(path)
    }
}

// =============================================================================
// TESTS
// =============================================================================
