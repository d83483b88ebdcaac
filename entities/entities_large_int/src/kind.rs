//! Integer Kind Module
//!
//! Provides the fixed-width integer classifications carried on the wire:
//! - `IntKind`: the six core kinds (u64, i64, u128, i128, u256, i256)
//! - `BitWidth`: the wire widths, including the native 32-bit width
//! - `Signedness`: unsigned or two's-complement signed
//!
//! Unsigned kinds hold `[0, 2^bits - 1]`. Signed kinds hold
//! `[-2^(bits-1), 2^(bits-1) - 1]` and use two's-complement on the wire.

use crate::error::IntError;
use malachite::Integer;
use std::fmt;
use std::str::FromStr;

/// Width of one canonical wire word in bits
pub const WORD_BITS: u32 = 64;

/// Signedness of a wire integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Non-negative values only
    Unsigned,
    /// Two's-complement signed values
    Signed,
}

impl Signedness {
    /// Returns `true` for `Signed`
    pub fn is_signed(self) -> bool {
        self == Signedness::Signed
    }
}

/// Wire integer width
///
/// Ordered from narrowest to widest, so `W32 < W64 < W128 < W256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitWidth {
    /// Native 32-bit integers (tag level only)
    W32,
    /// 64-bit integers
    W64,
    /// 128-bit integers
    W128,
    /// 256-bit integers
    W256,
}

impl BitWidth {
    /// All widths in ascending order
    pub const ALL: [BitWidth; 4] = [BitWidth::W32, BitWidth::W64, BitWidth::W128, BitWidth::W256];

    /// Number of bits in this width
    pub fn bits(self) -> u32 {
        match self {
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
            BitWidth::W128 => 128,
            BitWidth::W256 => 256,
        }
    }

    /// Core kind for this width and signedness
    ///
    /// Returns `None` for `W32`, which only exists as a native tag.
    pub fn kind(self, signedness: Signedness) -> Option<IntKind> {
        match (self, signedness) {
            (BitWidth::W32, _) => None,
            (BitWidth::W64, Signedness::Unsigned) => Some(IntKind::U64),
            (BitWidth::W64, Signedness::Signed) => Some(IntKind::I64),
            (BitWidth::W128, Signedness::Unsigned) => Some(IntKind::U128),
            (BitWidth::W128, Signedness::Signed) => Some(IntKind::I128),
            (BitWidth::W256, Signedness::Unsigned) => Some(IntKind::U256),
            (BitWidth::W256, Signedness::Signed) => Some(IntKind::I256),
        }
    }
}

/// Core wire integer kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    U64,
    I64,
    U128,
    I128,
    U256,
    I256,
}

impl IntKind {
    /// All kinds, narrowest first, unsigned before signed within a width
    pub const ALL: [IntKind; 6] = [
        IntKind::U64,
        IntKind::I64,
        IntKind::U128,
        IntKind::I128,
        IntKind::U256,
        IntKind::I256,
    ];

    /// Width of this kind
    pub fn width(self) -> BitWidth {
        match self {
            IntKind::U64 | IntKind::I64 => BitWidth::W64,
            IntKind::U128 | IntKind::I128 => BitWidth::W128,
            IntKind::U256 | IntKind::I256 => BitWidth::W256,
        }
    }

    /// Total number of bits
    pub fn bits(self) -> u32 {
        self.width().bits()
    }

    /// Signedness of this kind
    pub fn signedness(self) -> Signedness {
        match self {
            IntKind::U64 | IntKind::U128 | IntKind::U256 => Signedness::Unsigned,
            IntKind::I64 | IntKind::I128 | IntKind::I256 => Signedness::Signed,
        }
    }

    /// Returns `true` for the i* kinds
    pub fn is_signed(self) -> bool {
        self.signedness().is_signed()
    }

    /// Number of 64-bit words in the canonical layout (1, 2 or 4)
    pub fn word_count(self) -> usize {
        (self.bits() / WORD_BITS) as usize
    }

    /// Smallest representable value
    pub fn min_value(self) -> Integer {
        if self.is_signed() {
            -(Integer::from(1u32) << u64::from(self.bits() - 1))
        } else {
            Integer::from(0u32)
        }
    }

    /// Largest representable value
    pub fn max_value(self) -> Integer {
        let magnitude_bits = if self.is_signed() { self.bits() - 1 } else { self.bits() };
        (Integer::from(1u32) << u64::from(magnitude_bits)) - Integer::from(1u32)
    }

    /// Check whether `value` lies in `[min_value, max_value]`
    pub fn contains(self, value: &Integer) -> bool {
        *value >= self.min_value() && *value <= self.max_value()
    }

    /// Return `Ok(())` if `value` fits, otherwise a `Range` error
    pub fn check(self, value: &Integer) -> Result<(), IntError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(IntError::out_of_range(value, self.describe_range()))
        }
    }

    /// Lower-case kind name (`"u64"`, `"i256"`, ...)
    pub fn name(self) -> &'static str {
        match self {
            IntKind::U64 => "u64",
            IntKind::I64 => "i64",
            IntKind::U128 => "u128",
            IntKind::I128 => "i128",
            IntKind::U256 => "u256",
            IntKind::I256 => "i256",
        }
    }

    fn describe_range(self) -> String {
        format!("{} [{}, {}]", self.name(), self.min_value(), self.max_value())
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntKind {
    type Err = IntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| IntError::InvalidKind(s.to_string()))
    }
}
