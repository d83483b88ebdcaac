//! Word Codec Module
//!
//! Splits arbitrary precision integers into fixed-width unsigned words and
//! joins words back into integers.
//!
//! ## Word order
//!
//! Word groups are always most-significant word first. A 128-bit value split
//! into 64-bit words yields `[hi, lo]`.
//!
//! ## Sign handling
//!
//! Negative values are stored as their two's-complement bit pattern over the
//! full width of the group (`value + 2^total_bits`). The conversion in both
//! directions happens only in [`to_twos_complement`] and
//! [`from_twos_complement`].

use entities_large_int::{IntError, Integer, Signedness};
use infrastructure_debugging::DebugUtils;
use malachite::base::num::conversion::traits::WrappingFrom;

/// Width of a single wire word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
    /// 32-bit words
    W32,
    /// 64-bit words
    W64,
}

impl WordWidth {
    /// Number of bits in one word
    pub fn bits(self) -> u32 {
        match self {
            WordWidth::W32 => 32,
            WordWidth::W64 => 64,
        }
    }

    /// Largest value a single word may hold
    pub fn max_word(self) -> u64 {
        match self {
            WordWidth::W32 => u64::from(u32::MAX),
            WordWidth::W64 => u64::MAX,
        }
    }
}

/// `2^bits` as an arbitrary precision integer
pub fn power_of_two(bits: u32) -> Integer {
    Integer::from(1u32) << u64::from(bits)
}

/// Map a signed value onto its two's-complement bit pattern
///
/// Non-negative values are returned unchanged. The caller guarantees that
/// `value` lies in `[-2^(total_bits-1), 2^(total_bits-1) - 1]`.
pub fn to_twos_complement(value: &Integer, total_bits: u32) -> Integer {
    if *value < 0 {
        value.clone() + power_of_two(total_bits)
    } else {
        value.clone()
    }
}

/// Interpret an unsigned `total_bits`-wide pattern as two's-complement
///
/// The value is negative exactly when bit `total_bits - 1` is set. A
/// zero-width pattern has no sign bit and is returned unchanged.
pub fn from_twos_complement(pattern: Integer, total_bits: u32) -> Integer {
    if total_bits == 0 {
        return pattern;
    }
    if pattern >= power_of_two(total_bits - 1) {
        pattern - power_of_two(total_bits)
    } else {
        pattern
    }
}

/// Check that `value` fits a group of `total_bits` with the given signedness
fn check_group_range(
    value: &Integer,
    total_bits: u32,
    signedness: Signedness,
) -> Result<(), IntError> {
    let (min, max) = match signedness {
        Signedness::Unsigned => (Integer::from(0u32), power_of_two(total_bits) - Integer::from(1u32)),
        Signedness::Signed => (
            -power_of_two(total_bits - 1),
            power_of_two(total_bits - 1) - Integer::from(1u32),
        ),
    };
    if *value < min || *value > max {
        let target = group_name(total_bits, signedness);
        DebugUtils::debug_format("split rejected {} for {}", &[value, &target]);
        return Err(IntError::out_of_range(value, target));
    }
    Ok(())
}

/// Total bit width of `word_count` words, rejecting groups wider than `u32::MAX` bits
fn group_bits(word_width: WordWidth, word_count: usize, signedness: Signedness) -> Result<u32, IntError> {
    u32::try_from(word_count)
        .ok()
        .and_then(|count| count.checked_mul(word_width.bits()))
        .ok_or_else(|| IntError::Format {
            target: group_name(0, signedness),
            detail: format!("{} words of {} bits is too wide", word_count, word_width.bits()),
        })
}

fn group_name(total_bits: u32, signedness: Signedness) -> String {
    match signedness {
        Signedness::Unsigned => format!("unsigned {}-bit group", total_bits),
        Signedness::Signed => format!("signed {}-bit group", total_bits),
    }
}

/// Fill `words` with a non-negative bit pattern, most significant word first
///
/// Bits above `words.len() * word_width` are discarded.
pub(crate) fn fill_words(pattern: &Integer, word_width: WordWidth, words: &mut [u64]) {
    let shift = u64::from(word_width.bits());
    let mut remaining = pattern.clone();

    for slot in words.iter_mut().rev() {
        *slot = u64::wrapping_from(&remaining) & word_width.max_word();
        remaining >>= shift;
    }
}

/// Split a non-negative bit pattern into `word_count` words, MSW first
pub(crate) fn split_pattern(pattern: &Integer, word_width: WordWidth, word_count: usize) -> Vec<u64> {
    let mut words = vec![0; word_count];
    fill_words(pattern, word_width, &mut words);
    words
}

/// Split `value` into `word_count` unsigned words, most significant first
///
/// # Arguments
///
/// * `value` - The integer to split
/// * `word_width` - Width of each word
/// * `word_count` - Number of words to produce
/// * `signedness` - Whether `value` is encoded as two's-complement
///
/// # Returns
///
/// * `Ok(words)` - Exactly `word_count` words, each below `2^word_width`
/// * `Err(IntError::Range)` - `value` does not fit the group
/// * `Err(IntError::Format)` - `word_count` is zero, or the group is wider
///   than `u32::MAX` bits
///
/// # Examples
///
/// ```rust
/// use entities_large_int::{Integer, Signedness};
/// use infrastructure_bignum_encoding::word_codec::{split, WordWidth};
///
/// let words = split(&Integer::from(-1), WordWidth::W64, 2, Signedness::Signed).unwrap();
/// assert_eq!(words, vec![u64::MAX, u64::MAX]);
/// ```
pub fn split(
    value: &Integer,
    word_width: WordWidth,
    word_count: usize,
    signedness: Signedness,
) -> Result<Vec<u64>, IntError> {
    if word_count == 0 {
        return Err(IntError::word_count(group_name(0, signedness), 1, 0));
    }
    let total_bits = group_bits(word_width, word_count, signedness)?;
    check_group_range(value, total_bits, signedness)?;

    let pattern = match signedness {
        Signedness::Signed => to_twos_complement(value, total_bits),
        Signedness::Unsigned => value.clone(),
    };
    Ok(split_pattern(&pattern, word_width, word_count))
}

/// Join words, most significant first, into an integer
///
/// # Arguments
///
/// * `words` - The word group
/// * `word_width` - Width of each word
/// * `signedness` - Whether the group holds a two's-complement value
///
/// # Returns
///
/// * `Ok(value)` - The reassembled integer
/// * `Err(IntError::Format)` - Empty group, or a word wider than `word_width`
pub fn join(words: &[u64], word_width: WordWidth, signedness: Signedness) -> Result<Integer, IntError> {
    if words.is_empty() {
        return Err(IntError::word_count(group_name(0, signedness), 1, 0));
    }
    let total_bits = group_bits(word_width, words.len(), signedness)?;
    let shift = u64::from(word_width.bits());

    let mut pattern = Integer::from(0u32);
    for (index, &word) in words.iter().enumerate() {
        if word > word_width.max_word() {
            return Err(IntError::word_overflow(
                group_name(total_bits, signedness),
                index,
                word,
                word_width.bits(),
            ));
        }
        pattern = (pattern << shift) | Integer::from(word);
    }

    Ok(match signedness {
        Signedness::Signed => from_twos_complement(pattern, total_bits),
        Signedness::Unsigned => pattern,
    })
}
