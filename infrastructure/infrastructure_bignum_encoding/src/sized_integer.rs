//! Sized Integer Module
//!
//! Provides range-checked encoding of the six core kinds into word groups and
//! decoding of word groups back into integers.
//!
//! The canonical layout uses 64-bit words: one word for 64-bit kinds, two for
//! 128-bit kinds and four for 256-bit kinds. A 32-bit word layout with twice
//! as many words is also supported.

use crate::word_codec::{self, WordWidth};
use entities_large_int::{IntError, IntKind, Integer};
use infrastructure_debugging::DebugUtils;
use std::fmt;

/// An integer validated against a core kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SizedInteger {
    kind: IntKind,
    value: Integer,
}

impl SizedInteger {
    /// Validate `value` against `kind`
    ///
    /// # Returns
    ///
    /// * `Ok(SizedInteger)` - The value fits
    /// * `Err(IntError::Range)` - The value is outside the kind's range
    pub fn new(kind: IntKind, value: Integer) -> Result<Self, IntError> {
        Self::check(kind, &value)?;
        Ok(Self { kind, value })
    }

    /// Decode a word group into a sized integer
    pub fn from_words(kind: IntKind, words: &[u64]) -> Result<Self, IntError> {
        let value = Self::decode(kind, words)?;
        Ok(Self { kind, value })
    }

    pub fn kind(&self) -> IntKind {
        self.kind
    }

    pub fn value(&self) -> &Integer {
        &self.value
    }

    pub fn into_value(self) -> Integer {
        self.value
    }

    /// Canonical 64-bit word group, most significant first
    pub fn words(&self) -> Vec<u64> {
        let pattern = word_codec::to_twos_complement(&self.value, self.kind.bits());
        word_codec::split_pattern(&pattern, WordWidth::W64, self.kind.word_count())
    }

    /// The low `N` canonical words as an array, most significant first
    ///
    /// With `N == kind().word_count()` this is exactly [`words`](Self::words).
    pub fn fixed_words<const N: usize>(&self) -> [u64; N] {
        let pattern = word_codec::to_twos_complement(&self.value, self.kind.bits());
        let mut words = [0u64; N];
        word_codec::fill_words(&pattern, WordWidth::W64, &mut words);
        words
    }

    /// Smallest value of `kind`
    pub fn min_for(kind: IntKind) -> Integer {
        kind.min_value()
    }

    /// Largest value of `kind`
    pub fn max_for(kind: IntKind) -> Integer {
        kind.max_value()
    }

    fn check(kind: IntKind, value: &Integer) -> Result<(), IntError> {
        kind.check(value).map_err(|err| {
            DebugUtils::debug_format("encode rejected {} for {}", &[value, &kind]);
            err
        })
    }

    /// Encode `value` as a canonical 64-bit word group
    ///
    /// # Arguments
    ///
    /// * `kind` - Target kind
    /// * `value` - Value to encode
    ///
    /// # Returns
    ///
    /// * `Ok(words)` - `kind.word_count()` words, most significant first
    /// * `Err(IntError::Range)` - `value` is outside `[min_for(kind), max_for(kind)]`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_large_int::{IntKind, Integer};
    /// use infrastructure_bignum_encoding::SizedInteger;
    ///
    /// let words = SizedInteger::encode(IntKind::I128, &Integer::from(-2)).unwrap();
    /// assert_eq!(words, vec![u64::MAX, u64::MAX - 1]);
    /// ```
    pub fn encode(kind: IntKind, value: &Integer) -> Result<Vec<u64>, IntError> {
        Self::check(kind, value)?;
        let words = word_codec::split(value, WordWidth::W64, kind.word_count(), kind.signedness())?;
        DebugUtils::verbose_words(&format!("encode {}", kind), &words);
        Ok(words)
    }

    /// Decode a canonical 64-bit word group
    ///
    /// Any bit pattern of the right length decodes to an in-range value.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - The decoded integer
    /// * `Err(IntError::Format)` - `words.len()` differs from `kind.word_count()`
    pub fn decode(kind: IntKind, words: &[u64]) -> Result<Integer, IntError> {
        if words.len() != kind.word_count() {
            DebugUtils::debug_format(
                "decode {} got {} words",
                &[&kind, &words.len()],
            );
            return Err(IntError::word_count(kind.name(), kind.word_count(), words.len()));
        }
        DebugUtils::verbose_words(&format!("decode {}", kind), words);
        word_codec::join(words, WordWidth::W64, kind.signedness())
    }

    /// Encode `value` as a 32-bit word group (twice the canonical word count)
    pub fn encode_words32(kind: IntKind, value: &Integer) -> Result<Vec<u32>, IntError> {
        Self::check(kind, value)?;
        let words = word_codec::split(value, WordWidth::W32, kind.word_count() * 2, kind.signedness())?;
        // Every word is below 2^32
        Ok(words.into_iter().map(|word| word as u32).collect())
    }

    /// Decode a 32-bit word group (twice the canonical word count)
    pub fn decode_words32(kind: IntKind, words: &[u32]) -> Result<Integer, IntError> {
        let expected = kind.word_count() * 2;
        if words.len() != expected {
            return Err(IntError::word_count(
                format!("{} (32-bit words)", kind),
                expected,
                words.len(),
            ));
        }
        let widened: Vec<u64> = words.iter().map(|&word| u64::from(word)).collect();
        word_codec::join(&widened, WordWidth::W32, kind.signedness())
    }
}

impl fmt::Display for SizedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
