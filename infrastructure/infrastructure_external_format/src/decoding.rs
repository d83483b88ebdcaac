//! Decoding Module
//!
//! Provides the decoder entry point turning tagged wire values into native
//! arbitrary precision integers.

use entities_large_int::{IntError, IntKind, Integer, WireValue};
use infrastructure_bignum_encoding::SizedInteger;
use infrastructure_debugging::DebugUtils;

/// Decode an integer-tagged wire value into an `Integer`
///
/// 32-bit tags are returned directly. Wider tags are reassembled from their
/// words, most significant first:
/// - 64-bit: the single word (an `i64` contributes its bit pattern)
/// - 128-bit: `[hi, lo]`
/// - 256-bit: `[hi_hi, hi_lo, lo_hi, lo_lo]`
///
/// # Arguments
/// * `value` - The tagged wire value
///
/// # Returns
/// * `Ok(Integer)` - The decoded integer
/// * `Err(IntError::TypeMismatch)` - `value` does not carry an integer tag
///
/// # Examples
///
/// ```rust
/// use entities_large_int::{Integer, WireValue, Words128};
/// use infrastructure_external_format::decode_tagged_integer;
///
/// let value = WireValue::I128(Words128::new(u64::MAX, u64::MAX));
/// assert_eq!(decode_tagged_integer(&value).unwrap(), Integer::from(-1));
/// ```
pub fn decode_tagged_integer(value: &WireValue) -> Result<Integer, IntError> {
    match value {
        WireValue::U32(v) => Ok(Integer::from(*v)),
        WireValue::I32(v) => Ok(Integer::from(*v)),
        WireValue::U64(v) => SizedInteger::decode(IntKind::U64, &[*v]),
        WireValue::I64(v) => SizedInteger::decode(IntKind::I64, &[*v as u64]),
        WireValue::U128(words) => SizedInteger::decode(IntKind::U128, &words.to_words()),
        WireValue::I128(words) => SizedInteger::decode(IntKind::I128, &words.to_words()),
        WireValue::U256(words) => SizedInteger::decode(IntKind::U256, &words.to_words()),
        WireValue::I256(words) => SizedInteger::decode(IntKind::I256, &words.to_words()),
        WireValue::Bool(_)
        | WireValue::Void
        | WireValue::Timepoint(_)
        | WireValue::Duration(_)
        | WireValue::Bytes(_)
        | WireValue::String(_)
        | WireValue::Symbol(_) => {
            let tag = value.tag();
            DebugUtils::debug_format("decode_tagged_integer rejected tag {}", &[&tag]);
            Err(IntError::TypeMismatch { tag })
        }
    }
}

/// Decode a wire value as a sized integer of its own kind
///
/// Unlike [`decode_tagged_integer`], 32-bit tags are widened to the 64-bit
/// kind of the same signedness, since no core kind is 32 bits wide.
pub fn decode_sized_integer(value: &WireValue) -> Result<SizedInteger, IntError> {
    let kind = match value {
        WireValue::U32(_) => IntKind::U64,
        WireValue::I32(_) => IntKind::I64,
        other => int_kind_for(other)?,
    };
    let decoded = decode_tagged_integer(value)?;
    SizedInteger::new(kind, decoded)
}

fn int_kind_for(value: &WireValue) -> Result<IntKind, IntError> {
    let tag = value.tag();
    tag.int_kind().ok_or(IntError::TypeMismatch { tag })
}
