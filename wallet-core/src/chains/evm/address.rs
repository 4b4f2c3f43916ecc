// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module - secp256k1 key → Keccak-256 → 20-byte account address
// EIP-55 (Checksum) available for display, derivation output is lowercase hex

use crate::error::{CryptoError, WalletError, WalletResult};
use alloy::primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Intermediate hash and public key bytes are wiped after use
/// - This module never stores the private key
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Private Key → Address Bytes (20 bytes)
    // =========================================================================

    /// Derive the 20 address bytes for a secp256k1 private key.
    ///
    /// # Algorithm (Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Drop the 0x04 prefix → `pub_key_raw` (64B, X ‖ Y)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    ///
    /// Keccak-256 here is the original Keccak padding, not FIPS SHA3-256.
    pub fn derive_bytes(priv_key: &[u8]) -> WalletResult<[u8; 20]> {
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid secp256k1 private key: {}",
                e
            )))
        })?;

        let public_key = secret_key.public_key();
        let encoded = public_key.to_encoded_point(false);
        let pub_key_raw = &encoded.as_bytes()[1..];

        let mut hasher = Keccak::v256();
        let mut hash = Zeroizing::new([0u8; 32]);
        hasher.update(pub_key_raw);
        hasher.finalize(&mut *hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);

        Ok(address)
    }

    /// Derive the display address: `"0x"` + 40 lowercase hex characters.
    ///
    /// # Returns
    /// `"0x9858effd232b4033e47d90003d41ec34ecaeda94"`
    pub fn derive(priv_key: &[u8]) -> WalletResult<String> {
        let mut bytes = Self::derive_bytes(priv_key)?;
        let address = format!("0x{}", hex::encode(bytes));
        bytes.zeroize();
        Ok(address)
    }

    /// Same as [`derive`](Self::derive) but rendered with the EIP-55
    /// mixed-case checksum.
    #[inline]
    pub fn derive_checksummed(priv_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::derive_bytes(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// `0x` prefix + 40 hex chars, and a valid EIP-55 checksum if mixed case
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        let Some(digits) = address.strip_prefix("0x") else {
            return false;
        };
        if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }

        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper {
            Address::parse_checksummed(address, None).is_ok()
        } else {
            true
        }
    }

    /// Normalize to EIP-55 checksum format
    ///
    /// `"0xabcd..."` → `"0xAbCd..."`
    pub fn to_checksum(address: &str) -> WalletResult<String> {
        let addr: Address = address.parse().map_err(|_| {
            WalletError::Validation(format!("Invalid Ethereum address format: {}", address))
        })?;
        Ok(addr.to_checksum(None))
    }

    /// Compare two addresses byte-wise, ignoring case
    #[inline]
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        match (addr1.parse::<Address>(), addr2.parse::<Address>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const TEST_ADDRESS: &str = "0xb611C31e4284BF7A7daD3296e62880F14b3b15DD";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_derive_lowercase() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let address = EvmAddress::derive(&priv_key).unwrap();
        assert_eq!(address, TEST_ADDRESS.to_lowercase());
        assert_eq!(address.len(), 42);
    }

    #[test]
    fn test_derive_anvil() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let address = EvmAddress::derive(&priv_key).unwrap();
        assert_eq!(address, "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
        assert!(EvmAddress::equals(&address, ANVIL_ADDRESS));
    }

    #[test]
    fn test_derive_checksummed() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive_checksummed(&priv_key).unwrap(), TEST_ADDRESS);
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive_checksummed(&priv_key).unwrap(), ANVIL_ADDRESS);
    }

    #[test]
    fn test_derive_bytes_consistency() {
        let raw = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let string_addr = EvmAddress::derive(&raw).unwrap();
        let bytes_addr = EvmAddress::derive_bytes(&raw).unwrap();
        assert_eq!(string_addr, format!("0x{}", hex::encode(bytes_addr)));
    }

    #[test]
    fn test_is_valid() {
        assert!(EvmAddress::is_valid(TEST_ADDRESS));
        assert!(EvmAddress::is_valid(ANVIL_ADDRESS));
        assert!(EvmAddress::is_valid("0xdead000000000000000000000000000000000000"));

        assert!(!EvmAddress::is_valid("0xinvalid"));
        assert!(!EvmAddress::is_valid("not an address"));
        assert!(!EvmAddress::is_valid("0x123"));
        assert!(!EvmAddress::is_valid(""));
    }

    #[test]
    fn test_is_valid_checks_eip55_and_prefix() {
        // single-case input carries no checksum
        assert!(EvmAddress::is_valid("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(EvmAddress::is_valid("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266"));

        // first `F` of the checksummed Anvil address flipped
        assert!(!EvmAddress::is_valid("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert!(!EvmAddress::is_valid("0xF39fd6e51aad88F6F4ce6aB8827279cffFb92266"));

        assert!(!EvmAddress::is_valid("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(!EvmAddress::is_valid("0Xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(!EvmAddress::is_valid("0xf39fd6e51aad88f6f4ce6ab8827279cfffb9226g"));
    }

    #[test]
    fn test_to_checksum() {
        let lowercase = "0xb611c31e4284bf7a7dad3296e62880f14b3b15dd";
        assert_eq!(EvmAddress::to_checksum(lowercase).unwrap(), TEST_ADDRESS);
        assert!(matches!(
            EvmAddress::to_checksum("0x123"),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_equals() {
        let upper = "0xABCD1234ABCD1234ABCD1234ABCD1234ABCD1234";
        let lower = "0xabcd1234abcd1234abcd1234abcd1234abcd1234";
        assert!(EvmAddress::equals(upper, lower));
        assert!(!EvmAddress::equals(upper, TEST_ADDRESS));
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(EvmAddress::derive(&[0u8; 31]).is_err());
        assert!(EvmAddress::derive(&[0u8; 33]).is_err());
        assert!(EvmAddress::derive(&[]).is_err());
    }

    #[test]
    fn test_zero_private_key_rejected() {
        assert!(matches!(
            EvmAddress::derive(&[0u8; 32]),
            Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(_)))
        ));
    }
}
