// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 entropy <-> word list codec
// Entropy (128..256 bit) + SHA-256 checksum bits -> 11-bit groups -> English word list

use crate::crypto::seed::{derive_seed, Seed};
use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    #[default]
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Entropy bytes encoded by a phrase of this length
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    #[inline]
    pub const fn strength_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    /// Checksum bits appended to the entropy (ENT / 32)
    #[inline]
    pub const fn checksum_bits(self) -> usize {
        self.strength_bits() / 32
    }

    fn from_entropy_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(WordCount::Twelve),
            20 => Some(WordCount::Fifteen),
            24 => Some(WordCount::Eighteen),
            28 => Some(WordCount::TwentyOne),
            32 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

impl TryFrom<usize> for WordCount {
    type Error = MnemonicError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            other => Err(MnemonicError::InvalidWordCount(other)),
        }
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> Self {
        count as usize
    }
}

/// A validated BIP-39 phrase.
///
/// Only constructible through generation or a successful parse, so every
/// value held here decodes to entropy whose checksum matches. The phrase is
/// wiped on drop and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for WalletMnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.phrase == other.phrase
    }
}

impl Eq for WalletMnemonic {}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// New 12-word mnemonic (128-bit entropy)
    pub fn generate_default() -> WalletResult<Self> {
        Self::generate(WordCount::Twelve)
    }

    /// New mnemonic drawn from the OS CSPRNG.
    ///
    /// An unavailable random source is an error; there is no fallback RNG.
    pub fn generate(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        let mut entropy = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut entropy[..entropy_size])
            .map_err(|e| MnemonicError::EntropyUnavailable(e.to_string()))?;

        let result = Self::from_entropy(&entropy[..entropy_size]);
        entropy.zeroize();
        result
    }

    /// Encode raw entropy (16, 20, 24, 28 or 32 bytes) as a phrase
    pub fn from_entropy(entropy: &[u8]) -> WalletResult<Self> {
        let word_count = WordCount::from_entropy_len(entropy.len())
            .ok_or(MnemonicError::BadEntropyLength(entropy.len()))?;

        let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|e| WalletError::Mnemonic(map_bip39_error(e, &[])))?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Parse a user supplied phrase.
    ///
    /// Whitespace is normalized. Word count, word list membership and the
    /// checksum are checked in that order, each with its own error.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let count = words.len();
        WordCount::try_from(count)?;

        let normalized = Zeroizing::new(words.join(" ").to_lowercase());
        let lowered = normalized.split(' ').collect::<Vec<_>>();

        Mnemonic::parse_in_normalized(Language::English, &normalized)
            .map_err(|e| WalletError::Mnemonic(map_bip39_error(e, &lowered)))?;

        Ok(Self {
            phrase: (*normalized).clone(),
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The space-joined phrase. Handle with care: this is the root secret.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(' ').collect()
    }

    pub fn strength_bits(&self) -> usize {
        WordCount::try_from(self.word_count)
            .map(WordCount::strength_bits)
            .unwrap_or(0)
    }

    // =========================================================================
    // DECODING
    // =========================================================================

    /// Inverse of [`from_entropy`](Self::from_entropy)
    pub fn to_entropy(&self) -> WalletResult<Zeroizing<Vec<u8>>> {
        let mnemonic = self.as_bip39()?;
        Ok(Zeroizing::new(mnemonic.to_entropy()))
    }

    /// BIP-39 seed for this phrase (see [`derive_seed`])
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Seed> {
        derive_seed(self, passphrase.unwrap_or(""))
    }

    pub(crate) fn as_bip39(&self) -> WalletResult<Mnemonic> {
        Mnemonic::parse_in_normalized(Language::English, &self.phrase)
            .map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation collapsed to a bool. Never panics on malformed input.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    pub fn is_valid_word(word: &str) -> bool {
        Self::word_index(word).is_some()
    }

    /// Position of `word` in the English list (0..2048)
    pub fn word_index(word: &str) -> Option<u16> {
        Language::English.find_word(word)
    }
}

fn map_bip39_error(err: bip39::Error, words: &[&str]) -> MnemonicError {
    match err {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::UnknownWord(idx) => {
            MnemonicError::UnknownWord(words.get(idx).map(|w| w.to_string()).unwrap_or_default())
        }
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        bip39::Error::BadEntropyBitCount(bits) => MnemonicError::BadEntropyLength(bits / 8),
        other => MnemonicError::Bip39Error(other.to_string()),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_MNEMONIC_24: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    #[test]
    fn test_generate_12_words() {
        let mnemonic = WalletMnemonic::generate_default().unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert!(WalletMnemonic::validate(mnemonic.phrase()));
    }

    #[test]
    fn test_generate_24_words() {
        let mnemonic = WalletMnemonic::generate(WordCount::TwentyFour).unwrap();
        assert_eq!(mnemonic.word_count(), 24);
        assert_eq!(mnemonic.strength_bits(), 256);
        assert!(WalletMnemonic::validate(mnemonic.phrase()));
    }

    #[test]
    fn test_from_phrase_valid() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_24).unwrap();
        assert_eq!(mnemonic.word_count(), 24);
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace_and_case() {
        let messy =
            "  Abandon  abandon   abandon abandon abandon abandon\tabandon abandon abandon abandon abandon ABOUT\n";
        let mnemonic = WalletMnemonic::from_phrase(messy).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_12);
    }

    #[test]
    fn test_invalid_word_count() {
        let result = WalletMnemonic::from_phrase("abandon abandon abandon");
        assert!(matches!(
            result,
            Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(3)))
        ));

        // 13 words: not a multiple of 3
        let thirteen = format!("{} abandon", TEST_MNEMONIC_12);
        assert!(matches!(
            WalletMnemonic::from_phrase(&thirteen),
            Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(13)))
        ));

        // 27 words: multiple of 3 but above 24
        let twenty_seven = format!("{} abandon abandon abandon", TEST_MNEMONIC_24);
        assert!(matches!(
            WalletMnemonic::from_phrase(&twenty_seven),
            Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(27)))
        ));
    }

    #[test]
    fn test_unknown_word_is_reported() {
        let invalid = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon invalid";
        assert_eq!(
            WalletMnemonic::from_phrase(invalid),
            Err(WalletError::Mnemonic(MnemonicError::UnknownWord(
                "invalid".to_string()
            )))
        );
    }

    #[test]
    fn test_bad_checksum() {
        // every word valid, last word carries the wrong checksum
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert_eq!(
            WalletMnemonic::from_phrase(bad),
            Err(WalletError::Mnemonic(MnemonicError::ChecksumFailed))
        );
        assert!(!WalletMnemonic::validate(bad));
    }

    #[test]
    fn test_validate() {
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_12));
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_24));
        assert!(!WalletMnemonic::validate("invalid mnemonic phrase"));
        assert!(!WalletMnemonic::validate("abandon"));
        assert!(!WalletMnemonic::validate(""));
    }

    #[test]
    fn test_entropy_round_trip_known_vector() {
        // BIP-39 vector: 0x00 * 16 -> "abandon ... about"
        let mnemonic = WalletMnemonic::from_entropy(&[0u8; 16]).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_12);
        assert_eq!(&**mnemonic.to_entropy().unwrap(), &[0u8; 16]);

        // 0x7f * 16 -> "legal winner thank year wave sausage worth useful legal winner thank yellow"
        let mnemonic = WalletMnemonic::from_entropy(&[0x7f; 16]).unwrap();
        assert_eq!(
            mnemonic.phrase(),
            "legal winner thank year wave sausage worth useful legal winner thank yellow"
        );
    }

    #[test]
    fn test_bad_entropy_length() {
        assert_eq!(
            WalletMnemonic::from_entropy(&[0u8; 15]),
            Err(WalletError::Mnemonic(MnemonicError::BadEntropyLength(15)))
        );
    }

    #[test]
    fn test_word_lookup() {
        assert_eq!(WalletMnemonic::word_index("abandon"), Some(0));
        assert_eq!(WalletMnemonic::word_index("zoo"), Some(2047));
        assert!(WalletMnemonic::is_valid_word("about"));
        assert!(!WalletMnemonic::is_valid_word("invalidword"));
        assert!(WalletMnemonic::is_valid_word("hello"));
        assert!(!WalletMnemonic::is_valid_word("bitcoin"));
    }

    #[test]
    fn test_word_count_conversions() {
        assert_eq!(WordCount::try_from(18), Ok(WordCount::Eighteen));
        assert_eq!(
            WordCount::try_from(11),
            Err(MnemonicError::InvalidWordCount(11))
        );
        assert_eq!(WordCount::Twelve.checksum_bits(), 4);
        assert_eq!(WordCount::TwentyFour.checksum_bits(), 8);
        assert_eq!(usize::from(WordCount::TwentyOne), 21);
    }

    #[test]
    fn test_words() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let words = mnemonic.words();
        assert_eq!(words.len(), 12);
        assert_eq!(words[0], "abandon");
        assert_eq!(words[11], "about");
    }

    #[test]
    fn test_debug_does_not_leak_phrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let debug_output = format!("{:?}", mnemonic);
        assert!(!debug_output.contains("abandon"));
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains("word_count: 12"));
    }

    #[test]
    fn test_unique_generation() {
        let m1 = WalletMnemonic::generate_default().unwrap();
        let m2 = WalletMnemonic::generate_default().unwrap();
        assert_ne!(m1.phrase(), m2.phrase());
    }
}
