//! Entities Layer: Large Integers
//!
//! This crate provides the core data types shared by every layer of the large
//! integer codec. It defines the fixed-width integer kinds carried on the wire,
//! the tagged wire values that contain them, and the error taxonomy used by
//! all encode, decode and selection operations.
//!
//! ## Overview
//!
//! The `entities_large_int` crate is the innermost layer of the workspace. It
//! has no dependencies on other crates in the system, making it the foundation
//! that the infrastructure and use case layers build upon.
//!
//! ## Modules
//!
//! - **[`kind`](kind/index.html)**: The six core integer kinds (`u64`, `i64`,
//!   `u128`, `i128`, `u256`, `i256`) together with their bit widths, signedness,
//!   word counts and inclusive value ranges.
//!
//! - **[`wire_value`](wire_value/index.html)**: The tagged wire value container
//!   (`WireValue`) and its discriminant (`WireTag`), including the named word
//!   groups for 128-bit (`hi`, `lo`) and 256-bit (`hi_hi`, `hi_lo`, `lo_hi`,
//!   `lo_lo`) integers.
//!
//! - **[`error`](error/index.html)**: `IntError`, covering out-of-range values,
//!   malformed word groups and non-integer tags.
//!
//! ## Usage
//!
//! ```rust
//! use entities_large_int::{Integer, IntKind, WireValue, WireTag};
//!
//! let kind: IntKind = "i128".parse().unwrap();
//! assert!(kind.contains(&Integer::from(-5)));
//! assert_eq!(kind.word_count(), 2);
//!
//! let value = WireValue::String("hello".to_string());
//! assert_eq!(value.tag(), WireTag::String);
//! assert!(!value.tag().is_integer());
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html):
//!   word splitting and sized integer encoding built on these types

/*
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

pub mod error;
pub mod kind;
pub mod wire_value;

// Re-export main types for convenience
pub use error::IntError;
pub use kind::{BitWidth, IntKind, Signedness};
pub use wire_value::{WireTag, WireValue, Words128, Words256};

/// The native arbitrary-precision integer used throughout the workspace
pub use malachite::Integer;
