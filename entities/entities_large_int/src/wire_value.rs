//! Wire Value Module
//!
//! Provides the tagged value container exchanged on the wire. Only the eight
//! integer tags carry values this workspace decodes; the remaining tags exist
//! so that callers can hand over any wire value and get a typed rejection.
//!
//! Word groups are stored with named words:
//! - 128-bit: `hi`, `lo`
//! - 256-bit: `hi_hi`, `hi_lo`, `lo_hi`, `lo_lo`
//!
//! Signed 128/256-bit values store their two's-complement bit pattern in the
//! same unsigned words as the unsigned kinds.

use crate::kind::{BitWidth, IntKind, Signedness};
use std::fmt;

/// Two 64-bit words holding a 128-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Words128 {
    pub hi: u64,
    pub lo: u64,
}

impl Words128 {
    pub fn new(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// Words in most-significant-first order
    pub fn to_words(self) -> [u64; 2] {
        [self.hi, self.lo]
    }

    /// Build from words in most-significant-first order
    pub fn from_words(words: [u64; 2]) -> Self {
        Self {
            hi: words[0],
            lo: words[1],
        }
    }
}

/// Four 64-bit words holding a 256-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Words256 {
    pub hi_hi: u64,
    pub hi_lo: u64,
    pub lo_hi: u64,
    pub lo_lo: u64,
}

impl Words256 {
    pub fn new(hi_hi: u64, hi_lo: u64, lo_hi: u64, lo_lo: u64) -> Self {
        Self {
            hi_hi,
            hi_lo,
            lo_hi,
            lo_lo,
        }
    }

    /// Words in most-significant-first order
    pub fn to_words(self) -> [u64; 4] {
        [self.hi_hi, self.hi_lo, self.lo_hi, self.lo_lo]
    }

    /// Build from words in most-significant-first order
    pub fn from_words(words: [u64; 4]) -> Self {
        Self {
            hi_hi: words[0],
            hi_lo: words[1],
            lo_hi: words[2],
            lo_lo: words[3],
        }
    }

    /// Upper 128 bits
    pub fn high(self) -> Words128 {
        Words128::new(self.hi_hi, self.hi_lo)
    }

    /// Lower 128 bits
    pub fn low(self) -> Words128 {
        Words128::new(self.lo_hi, self.lo_lo)
    }

    /// Join two 128-bit halves
    pub fn from_halves(high: Words128, low: Words128) -> Self {
        Self::new(high.hi, high.lo, low.hi, low.lo)
    }
}

/// Discriminant of a wire value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireTag {
    Bool,
    Void,
    U32,
    I32,
    U64,
    I64,
    Timepoint,
    Duration,
    U128,
    I128,
    U256,
    I256,
    Bytes,
    String,
    Symbol,
}

impl WireTag {
    /// Tag name as it appears in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            WireTag::Bool => "bool",
            WireTag::Void => "void",
            WireTag::U32 => "u32",
            WireTag::I32 => "i32",
            WireTag::U64 => "u64",
            WireTag::I64 => "i64",
            WireTag::Timepoint => "timepoint",
            WireTag::Duration => "duration",
            WireTag::U128 => "u128",
            WireTag::I128 => "i128",
            WireTag::U256 => "u256",
            WireTag::I256 => "i256",
            WireTag::Bytes => "bytes",
            WireTag::String => "string",
            WireTag::Symbol => "symbol",
        }
    }

    /// Width and signedness for the eight integer tags
    pub fn integer_layout(self) -> Option<(BitWidth, Signedness)> {
        match self {
            WireTag::U32 => Some((BitWidth::W32, Signedness::Unsigned)),
            WireTag::I32 => Some((BitWidth::W32, Signedness::Signed)),
            WireTag::U64 => Some((BitWidth::W64, Signedness::Unsigned)),
            WireTag::I64 => Some((BitWidth::W64, Signedness::Signed)),
            WireTag::U128 => Some((BitWidth::W128, Signedness::Unsigned)),
            WireTag::I128 => Some((BitWidth::W128, Signedness::Signed)),
            WireTag::U256 => Some((BitWidth::W256, Signedness::Unsigned)),
            WireTag::I256 => Some((BitWidth::W256, Signedness::Signed)),
            WireTag::Bool
            | WireTag::Void
            | WireTag::Timepoint
            | WireTag::Duration
            | WireTag::Bytes
            | WireTag::String
            | WireTag::Symbol => None,
        }
    }

    /// Returns `true` for the eight integer tags
    pub fn is_integer(self) -> bool {
        self.integer_layout().is_some()
    }

    /// Core kind carried by this tag (64-bit and wider integer tags only)
    pub fn int_kind(self) -> Option<IntKind> {
        self.integer_layout()
            .and_then(|(width, signedness)| width.kind(signedness))
    }

    /// Wire tag used for a core kind
    pub fn for_kind(kind: IntKind) -> Self {
        match kind {
            IntKind::U64 => WireTag::U64,
            IntKind::I64 => WireTag::I64,
            IntKind::U128 => WireTag::U128,
            IntKind::I128 => WireTag::I128,
            IntKind::U256 => WireTag::U256,
            IntKind::I256 => WireTag::I256,
        }
    }
}

impl fmt::Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tagged wire value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    Bool(bool),
    Void,
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    /// Seconds since the epoch
    Timepoint(u64),
    /// Seconds
    Duration(u64),
    U128(Words128),
    I128(Words128),
    U256(Words256),
    I256(Words256),
    Bytes(Vec<u8>),
    String(String),
    Symbol(String),
}

impl WireValue {
    /// Discriminant of this value
    pub fn tag(&self) -> WireTag {
        match self {
            WireValue::Bool(_) => WireTag::Bool,
            WireValue::Void => WireTag::Void,
            WireValue::U32(_) => WireTag::U32,
            WireValue::I32(_) => WireTag::I32,
            WireValue::U64(_) => WireTag::U64,
            WireValue::I64(_) => WireTag::I64,
            WireValue::Timepoint(_) => WireTag::Timepoint,
            WireValue::Duration(_) => WireTag::Duration,
            WireValue::U128(_) => WireTag::U128,
            WireValue::I128(_) => WireTag::I128,
            WireValue::U256(_) => WireTag::U256,
            WireValue::I256(_) => WireTag::I256,
            WireValue::Bytes(_) => WireTag::Bytes,
            WireValue::String(_) => WireTag::String,
            WireValue::Symbol(_) => WireTag::Symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words128_order() {
        let words = Words128::new(1, 2);
        assert_eq!(words.to_words(), [1, 2]);
        assert_eq!(Words128::from_words([1, 2]), words);
    }

    #[test]
    fn test_words256_halves() {
        let words = Words256::new(1, 2, 3, 4);
        assert_eq!(words.to_words(), [1, 2, 3, 4]);
        assert_eq!(words.high(), Words128::new(1, 2));
        assert_eq!(words.low(), Words128::new(3, 4));
        assert_eq!(Words256::from_halves(words.high(), words.low()), words);
    }

    #[test]
    fn test_integer_tags() {
        let integer_tags = [
            WireTag::U32,
            WireTag::I32,
            WireTag::U64,
            WireTag::I64,
            WireTag::U128,
            WireTag::I128,
            WireTag::U256,
            WireTag::I256,
        ];
        for tag in integer_tags {
            assert!(tag.is_integer(), "{} should be an integer tag", tag);
        }
        for tag in [WireTag::Bool, WireTag::Timepoint, WireTag::String, WireTag::Symbol] {
            assert!(!tag.is_integer());
        }
    }

    #[test]
    fn test_int_kind_for_tags() {
        assert_eq!(WireTag::U32.int_kind(), None);
        assert_eq!(WireTag::I128.int_kind(), Some(IntKind::I128));
        assert_eq!(WireTag::Duration.int_kind(), None);
        for kind in IntKind::ALL {
            assert_eq!(WireTag::for_kind(kind).int_kind(), Some(kind));
        }
    }

    #[test]
    fn test_value_tag() {
        assert_eq!(WireValue::Void.tag(), WireTag::Void);
        assert_eq!(WireValue::I256(Words256::default()).tag(), WireTag::I256);
        assert_eq!(WireValue::Symbol("x".to_string()).tag().to_string(), "symbol");
    }
}
