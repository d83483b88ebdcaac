//! Error Module
//!
//! Provides the error taxonomy shared by the codec layers:
//! - `Range`: a value does not fit the requested or selected kind
//! - `Format`: a word group is structurally wrong for its kind
//! - `TypeMismatch`: an integer was requested from a non-integer tag
//!
//! Every failure is a caller-input error. Nothing is retried and no partial
//! result is ever returned alongside an error.

use crate::wire_value::WireTag;
use malachite::Integer;

/// Errors produced by encoding, decoding and kind selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntError {
    /// Value outside the range of the target kind (never clamped)
    #[error("value {value} is out of range for {target}")]
    Range {
        /// Decimal rendering of the rejected value
        value: String,
        /// Kind or constraint the value was checked against
        target: String,
    },
    /// Word group does not match the layout of its kind
    #[error("malformed word group for {target}: {detail}")]
    Format {
        /// Kind or layout being decoded
        target: String,
        /// What was wrong with the group
        detail: String,
    },
    /// Integer decode requested on a non-integer wire value
    #[error("expected integer type, got {tag}")]
    TypeMismatch {
        /// The offending tag
        tag: WireTag,
    },
    /// A kind name that does not parse
    #[error("invalid integer kind: {0}")]
    InvalidKind(String),
}

impl IntError {
    /// Build a `Range` error for `value` against `target`
    pub fn out_of_range(value: &Integer, target: impl Into<String>) -> Self {
        IntError::Range {
            value: value.to_string(),
            target: target.into(),
        }
    }

    /// Build a `Format` error for a word group of the wrong length
    pub fn word_count(target: impl Into<String>, expected: usize, found: usize) -> Self {
        IntError::Format {
            target: target.into(),
            detail: format!("expected {} words, got {}", expected, found),
        }
    }

    /// Build a `Format` error for a word wider than its layout allows
    pub fn word_overflow(target: impl Into<String>, index: usize, word: u64, bits: u32) -> Self {
        IntError::Format {
            target: target.into(),
            detail: format!("word {} (0x{:x}) exceeds {} bits", index, word, bits),
        }
    }

    /// Returns `true` for `Range` errors
    pub fn is_range(&self) -> bool {
        matches!(self, IntError::Range { .. })
    }

    /// Returns `true` for `Format` errors
    pub fn is_format(&self) -> bool {
        matches!(self, IntError::Format { .. })
    }

    /// Returns `true` for `TypeMismatch` errors
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, IntError::TypeMismatch { .. })
    }
}
