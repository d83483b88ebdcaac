//! Encoding Module
//!
//! Provides construction of integer-tagged wire values from native integers.
//! The wire tag always matches the requested kind; picking the kind is left
//! to the caller (see the type selection use case).

use entities_large_int::{IntError, IntKind, Integer, WireTag, WireValue, Words128, Words256};
use infrastructure_bignum_encoding::SizedInteger;
use infrastructure_debugging::DebugUtils;

/// Encode `value` as a wire value tagged with `kind`
///
/// # Arguments
/// * `kind` - Kind of the resulting tag
/// * `value` - Value to encode
///
/// # Returns
/// * `Ok(WireValue)` - `U64`/`I64`/`U128`/`I128`/`U256`/`I256` variant
/// * `Err(IntError::Range)` - `value` does not fit `kind`
pub fn encode_tagged_integer(kind: IntKind, value: &Integer) -> Result<WireValue, IntError> {
    let sized = SizedInteger::new(kind, value.clone())?;
    let wire = sized_to_wire_value(&sized);
    DebugUtils::verbose_words(&format!("encode {}", wire.tag()), &sized.words());
    Ok(wire)
}

/// Wrap an already validated sized integer in its wire value
///
/// `I64` carries the bit pattern of its single word.
pub fn sized_to_wire_value(sized: &SizedInteger) -> WireValue {
    match sized.kind() {
        IntKind::U64 => {
            let [word] = sized.fixed_words();
            WireValue::U64(word)
        }
        IntKind::I64 => {
            let [word] = sized.fixed_words();
            WireValue::I64(word as i64)
        }
        IntKind::U128 => WireValue::U128(Words128::from_words(sized.fixed_words())),
        IntKind::I128 => WireValue::I128(Words128::from_words(sized.fixed_words())),
        IntKind::U256 => WireValue::U256(Words256::from_words(sized.fixed_words())),
        IntKind::I256 => WireValue::I256(Words256::from_words(sized.fixed_words())),
    }
}

/// Core kind carried by a wire tag
///
/// Returns `None` for non-integer tags and for the 32-bit tags.
pub fn int_kind_for_tag(tag: WireTag) -> Option<IntKind> {
    tag.int_kind()
}
