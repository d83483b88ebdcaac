//! Selection Facades
//!
//! Kind selection and wire value construction without a caller-chosen kind.

use entities_large_int::{IntError, IntKind, Integer, WireValue};
use usecases_type_selection::KindHint;

/// Select the narrowest core kind that can hold `value`
///
/// Non-negative values prefer the unsigned kind of a width; negative values
/// only select signed kinds.
pub fn select_kind(value: &Integer, hint: Option<KindHint>) -> Result<IntKind, IntError> {
    usecases_type_selection::select_kind(value, hint)
}

/// Encode `value` as a wire value of the narrowest permitted kind
pub fn to_wire_value(value: &Integer, hint: Option<KindHint>) -> Result<WireValue, IntError> {
    usecases_type_selection::to_wire_value(value, hint)
}
