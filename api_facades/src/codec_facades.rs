//! Codec Facades
//!
//! Word group encoding and decoding for an explicit kind.

use entities_large_int::{IntError, IntKind, Integer, WireValue};
use infrastructure_bignum_encoding::SizedInteger;

/// Encode `value` as the canonical 64-bit word group of `kind`
///
/// # Returns
/// * `Ok(Vec<u64>)` - `kind.word_count()` words, most significant first
/// * `Err(IntError::Range)` - `value` does not fit `kind`
pub fn encode(kind: IntKind, value: &Integer) -> Result<Vec<u64>, IntError> {
    SizedInteger::encode(kind, value)
}

/// Decode a canonical 64-bit word group of `kind`
///
/// # Returns
/// * `Ok(Integer)` - The decoded value
/// * `Err(IntError::Format)` - `words` has the wrong length
pub fn decode(kind: IntKind, words: &[u64]) -> Result<Integer, IntError> {
    SizedInteger::decode(kind, words)
}

/// Encode `value` as 32-bit words (twice as many as [`encode`])
pub fn encode_words32(kind: IntKind, value: &Integer) -> Result<Vec<u32>, IntError> {
    SizedInteger::encode_words32(kind, value)
}

/// Decode a 32-bit word group of `kind`
pub fn decode_words32(kind: IntKind, words: &[u32]) -> Result<Integer, IntError> {
    SizedInteger::decode_words32(kind, words)
}

/// Decode an integer-tagged wire value
///
/// # Returns
/// * `Ok(Integer)` - For any of the eight integer tags
/// * `Err(IntError::TypeMismatch)` - For every other tag
pub fn decode_tagged_integer(value: &WireValue) -> Result<Integer, IntError> {
    infrastructure_external_format::decode_tagged_integer(value)
}

/// Encode `value` as a wire value tagged with an explicit `kind`
pub fn encode_tagged_integer(kind: IntKind, value: &Integer) -> Result<WireValue, IntError> {
    infrastructure_external_format::encode_tagged_integer(kind, value)
}
