//! Kind Selection Module
//!
//! Picks the narrowest core kind able to represent a value.
//!
//! Widths are tried in ascending order (32, 64, 128, 256). No core kind is
//! 32 bits wide, so the narrowest kind ever returned is 64 bits. Within a
//! width the unsigned kind is preferred for non-negative values; negative
//! values only ever select signed kinds. The width grows only when neither
//! candidate at the current width can hold the value.
//!
//! A hint fixing both signedness and width names a single kind, which is
//! checked without any search.

use entities_large_int::{BitWidth, IntError, IntKind, Integer, Signedness};
use infrastructure_debugging::DebugUtils;

/// Constraints on kind selection
///
/// `signedness` restricts the candidates to one signedness. `min_width` alone
/// is the width the search starts at; wider kinds remain eligible. When both
/// are set the hint names exactly one kind and the value must fit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindHint {
    pub signedness: Option<Signedness>,
    pub min_width: Option<BitWidth>,
}

impl KindHint {
    /// Only unsigned kinds
    pub fn unsigned() -> Self {
        Self {
            signedness: Some(Signedness::Unsigned),
            min_width: None,
        }
    }

    /// Only signed kinds
    pub fn signed() -> Self {
        Self {
            signedness: Some(Signedness::Signed),
            min_width: None,
        }
    }

    /// Any signedness, starting at `width`
    pub fn at_least(width: BitWidth) -> Self {
        Self {
            signedness: None,
            min_width: Some(width),
        }
    }

    /// Exactly `kind`, with no escalation
    pub fn exact(kind: IntKind) -> Self {
        Self {
            signedness: Some(kind.signedness()),
            min_width: Some(kind.width()),
        }
    }

    pub fn with_min_width(mut self, width: BitWidth) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn with_signedness(mut self, signedness: Signedness) -> Self {
        self.signedness = Some(signedness);
        self
    }

    fn describe(&self) -> String {
        let signedness = match self.signedness {
            Some(Signedness::Unsigned) => "unsigned kinds",
            Some(Signedness::Signed) => "signed kinds",
            None => "any kind",
        };
        match self.min_width {
            Some(width) => format!("{} from {} to 256 bits", signedness, width.bits()),
            None => format!("{} up to 256 bits", signedness),
        }
    }
}

fn candidates(negative: bool, requested: Option<Signedness>) -> &'static [Signedness] {
    match (requested, negative) {
        (Some(Signedness::Unsigned), _) => &[Signedness::Unsigned],
        (Some(Signedness::Signed), _) => &[Signedness::Signed],
        (None, true) => &[Signedness::Signed],
        (None, false) => &[Signedness::Unsigned, Signedness::Signed],
    }
}

/// Select the narrowest kind that can hold `value`
///
/// # Arguments
///
/// * `value` - The value to classify
/// * `hint` - Optional signedness and minimum width constraints
///
/// # Returns
///
/// * `Ok(IntKind)` - The narrowest matching kind
/// * `Err(IntError::Range)` - A negative value with an unsigned hint, a value
///   outside the single kind a full hint names, or a value no permitted kind
///   can hold
/// * `Err(IntError::InvalidKind)` - A full hint naming a 32-bit width
///
/// # Examples
///
/// ```rust
/// use entities_large_int::{IntKind, Integer};
/// use usecases_type_selection::select_kind;
///
/// assert_eq!(select_kind(&Integer::from(5), None).unwrap(), IntKind::U64);
/// assert_eq!(select_kind(&Integer::from(-5), None).unwrap(), IntKind::I64);
/// ```
pub fn select_kind(value: &Integer, hint: Option<KindHint>) -> Result<IntKind, IntError> {
    let hint = hint.unwrap_or_default();
    if let (Some(signedness), Some(width)) = (hint.signedness, hint.min_width) {
        return exact_kind(value, width, signedness);
    }

    let negative = *value < 0;

    if negative && hint.signedness == Some(Signedness::Unsigned) {
        DebugUtils::debug_format("select_kind: negative {} with unsigned hint", &[value]);
        return Err(IntError::out_of_range(value, hint.describe()));
    }

    let start = hint.min_width.unwrap_or(BitWidth::W32);
    for width in BitWidth::ALL.iter().copied().filter(|width| *width >= start) {
        for &signedness in candidates(negative, hint.signedness) {
            if let Some(kind) = width.kind(signedness) {
                if kind.contains(value) {
                    return Ok(kind);
                }
            }
        }
    }

    DebugUtils::debug_format("select_kind: no kind holds {}", &[value]);
    Err(IntError::out_of_range(value, hint.describe()))
}

fn exact_kind(value: &Integer, width: BitWidth, signedness: Signedness) -> Result<IntKind, IntError> {
    let kind = width.kind(signedness).ok_or_else(|| {
        let prefix = if signedness.is_signed() { "i" } else { "u" };
        IntError::InvalidKind(format!("{}{}", prefix, width.bits()))
    })?;
    kind.check(value).map_err(|err| {
        DebugUtils::debug_format("select_kind: {} does not fit {}", &[value, &kind]);
        err
    })?;
    Ok(kind)
}
