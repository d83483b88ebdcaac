//! Large Integer Module
//!
//! Provides `LargeInt`, an integer paired with the wire kind it travels as.
//!
//! A `LargeInt` is created either for an explicit kind (the value is checked
//! against it) or from the value alone, in which case the narrowest kind is
//! selected. Once built, it converts to word groups, wire values, other kinds
//! and native Rust integers.

use crate::selector::{select_kind, KindHint};
use entities_large_int::{IntError, IntKind, Integer, WireValue};
use infrastructure_bignum_encoding::SizedInteger;
use infrastructure_external_format::{decode_sized_integer, sized_to_wire_value};
use std::fmt;

/// Largest magnitude an IEEE-754 double represents exactly (`2^53 - 1`)
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// An integer bound to a core wire kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LargeInt {
    inner: SizedInteger,
}

impl LargeInt {
    /// Bind `value` to an explicit kind
    ///
    /// # Returns
    ///
    /// * `Ok(LargeInt)` - `value` fits `kind`
    /// * `Err(IntError::Range)` - `value` is outside `kind`'s range
    pub fn new(kind: IntKind, value: Integer) -> Result<Self, IntError> {
        Ok(Self {
            inner: SizedInteger::new(kind, value)?,
        })
    }

    /// Bind `value` to the narrowest kind that holds it
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_large_int::{IntKind, Integer};
    /// use usecases_type_selection::LargeInt;
    ///
    /// let big = LargeInt::from_value(Integer::from(u64::MAX) + Integer::from(1)).unwrap();
    /// assert_eq!(big.kind(), IntKind::U128);
    /// ```
    pub fn from_value(value: Integer) -> Result<Self, IntError> {
        Self::with_hint(value, None)
    }

    /// Bind `value` to the narrowest kind allowed by `hint`
    pub fn with_hint(value: Integer, hint: Option<KindHint>) -> Result<Self, IntError> {
        let kind = select_kind(&value, hint)?;
        Self::new(kind, value)
    }

    /// Decode a canonical word group of `kind`
    pub fn from_words(kind: IntKind, words: &[u64]) -> Result<Self, IntError> {
        Ok(Self {
            inner: SizedInteger::from_words(kind, words)?,
        })
    }

    /// Decode an integer-tagged wire value
    ///
    /// 32-bit tags become the 64-bit kind of the same signedness.
    pub fn from_wire_value(value: &WireValue) -> Result<Self, IntError> {
        Ok(Self {
            inner: decode_sized_integer(value)?,
        })
    }

    /// Returns `true` if `name` is a core kind name such as `"i128"`
    pub fn is_type(name: &str) -> bool {
        name.parse::<IntKind>().is_ok()
    }

    pub fn kind(&self) -> IntKind {
        self.inner.kind()
    }

    pub fn value(&self) -> &Integer {
        self.inner.value()
    }

    pub fn into_value(self) -> Integer {
        self.inner.into_value()
    }

    /// Canonical 64-bit word group, most significant first
    pub fn to_words(&self) -> Vec<u64> {
        self.inner.words()
    }

    /// Wire value tagged with this integer's kind
    pub fn to_wire_value(&self) -> WireValue {
        sized_to_wire_value(&self.inner)
    }

    /// Re-bind the value to another kind
    ///
    /// # Returns
    ///
    /// * `Ok(LargeInt)` - The value also fits `kind`
    /// * `Err(IntError::Range)` - It does not
    pub fn to_kind(&self, kind: IntKind) -> Result<Self, IntError> {
        Self::new(kind, self.value().clone())
    }

    pub fn to_i64(&self) -> Result<i64, IntError> {
        i64::try_from(self.value()).map_err(|_| IntError::out_of_range(self.value(), "i64"))
    }

    pub fn to_u64(&self) -> Result<u64, IntError> {
        u64::try_from(self.value()).map_err(|_| IntError::out_of_range(self.value(), "u64"))
    }

    pub fn to_i128(&self) -> Result<i128, IntError> {
        i128::try_from(self.value()).map_err(|_| IntError::out_of_range(self.value(), "i128"))
    }

    pub fn to_u128(&self) -> Result<u128, IntError> {
        u128::try_from(self.value()).map_err(|_| IntError::out_of_range(self.value(), "u128"))
    }

    /// Convert to an integer a double can represent exactly
    ///
    /// Fails outside `[-(2^53 - 1), 2^53 - 1]`.
    pub fn to_safe_number(&self) -> Result<i64, IntError> {
        match self.to_i64() {
            Ok(v) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&v) => Ok(v),
            _ => Err(IntError::out_of_range(
                self.value(),
                format!("safe integer range [-{}, {}]", MAX_SAFE_INTEGER, MAX_SAFE_INTEGER),
            )),
        }
    }
}

impl From<SizedInteger> for LargeInt {
    fn from(inner: SizedInteger) -> Self {
        Self { inner }
    }
}

impl From<LargeInt> for SizedInteger {
    fn from(large: LargeInt) -> Self {
        large.inner
    }
}

impl TryFrom<&WireValue> for LargeInt {
    type Error = IntError;

    fn try_from(value: &WireValue) -> Result<Self, Self::Error> {
        Self::from_wire_value(value)
    }
}

impl fmt::Display for LargeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_large_int::{Words128, Words256};

    #[test]
    fn test_new_explicit_kind() {
        let large = LargeInt::new(IntKind::I128, Integer::from(-7)).unwrap();
        assert_eq!(large.kind(), IntKind::I128);
        assert_eq!(large.to_words(), vec![u64::MAX, u64::MAX - 6]);
        assert!(LargeInt::new(IntKind::U64, Integer::from(-7)).unwrap_err().is_range());
    }

    #[test]
    fn test_from_value_selects_kind() {
        assert_eq!(LargeInt::from_value(Integer::from(1)).unwrap().kind(), IntKind::U64);
        assert_eq!(LargeInt::from_value(Integer::from(-1)).unwrap().kind(), IntKind::I64);
        let wide = Integer::from(i128::MIN);
        assert_eq!(LargeInt::from_value(wide).unwrap().kind(), IntKind::I128);
    }

    #[test]
    fn test_to_wire_value() {
        let large = LargeInt::new(IntKind::U128, Integer::from(u64::MAX)).unwrap();
        assert_eq!(large.to_wire_value(), WireValue::U128(Words128::new(0, u64::MAX)));
        let large = LargeInt::new(IntKind::I256, Integer::from(-2)).unwrap();
        assert_eq!(
            large.to_wire_value(),
            WireValue::I256(Words256::new(u64::MAX, u64::MAX, u64::MAX, u64::MAX - 1))
        );
    }

    #[test]
    fn test_from_wire_value() {
        let large = LargeInt::from_wire_value(&WireValue::I32(-3)).unwrap();
        assert_eq!(large.kind(), IntKind::I64);
        assert_eq!(large.to_i64().unwrap(), -3);
        assert!(LargeInt::try_from(&WireValue::Void).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_to_kind() {
        let large = LargeInt::new(IntKind::U256, Integer::from(100)).unwrap();
        assert_eq!(large.to_kind(IntKind::I64).unwrap().kind(), IntKind::I64);
        let negative = LargeInt::new(IntKind::I64, Integer::from(-100)).unwrap();
        assert!(negative.to_kind(IntKind::U128).unwrap_err().is_range());
    }

    #[test]
    fn test_native_conversions() {
        let large = LargeInt::new(IntKind::U128, Integer::from(u128::MAX)).unwrap();
        assert_eq!(large.to_u128().unwrap(), u128::MAX);
        assert!(large.to_u64().unwrap_err().is_range());
        assert!(large.to_i128().unwrap_err().is_range());

        let negative = LargeInt::new(IntKind::I64, Integer::from(i64::MIN)).unwrap();
        assert_eq!(negative.to_i64().unwrap(), i64::MIN);
        assert!(negative.to_u64().unwrap_err().is_range());
    }

    #[test]
    fn test_safe_number() {
        let ok = LargeInt::new(IntKind::I64, Integer::from(-MAX_SAFE_INTEGER)).unwrap();
        assert_eq!(ok.to_safe_number().unwrap(), -MAX_SAFE_INTEGER);
        let too_big = LargeInt::new(IntKind::U64, Integer::from(1u64 << 53)).unwrap();
        assert!(too_big.to_safe_number().unwrap_err().is_range());
    }

    #[test]
    fn test_is_type_and_display() {
        assert!(LargeInt::is_type("u256"));
        assert!(!LargeInt::is_type("u32"));
        let large = LargeInt::new(IntKind::I64, Integer::from(-42)).unwrap();
        assert_eq!(large.to_string(), "-42");
    }
}
