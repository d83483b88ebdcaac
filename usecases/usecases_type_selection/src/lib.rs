//! Use Cases Layer: Type Selection
//!
//! Provides minimal wire integer kind selection and the `LargeInt` value type.
//!
//! ## Overview
//!
//! The `usecases_type_selection` crate is part of the use cases layer. Given an
//! arbitrary precision integer it chooses the narrowest core kind (`u64`,
//! `i64`, `u128`, `i128`, `u256`, `i256`) able to represent it, optionally
//! constrained by a [`KindHint`], and builds the matching wire value.
//!
//! ## Modules
//!
//! - **[`selector`](selector/index.html)**: `select_kind` and `KindHint`
//!
//! - **[`large_int`](large_int/index.html)**: `LargeInt`, a value bound to its
//!   kind with conversions to words, wire values and native integers
//!
//! ## See Also
//!
//! - [`infrastructure_external_format`](../../infrastructure/infrastructure_external_format/index.html): tagged value codec
//! - [`entities_large_int`](../../entities/entities_large_int/index.html): kinds and wire values

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

pub mod large_int;
pub mod selector;

pub use large_int::{LargeInt, MAX_SAFE_INTEGER};
pub use selector::{select_kind, KindHint};

use entities_large_int::{IntError, Integer, WireValue};

/// Encode `value` as a wire value of the narrowest kind allowed by `hint`
///
/// # Returns
///
/// * `Ok(WireValue)` - Tagged with the selected kind
/// * `Err(IntError::Range)` - No permitted kind holds `value`
///
/// # Examples
///
/// ```rust
/// use entities_large_int::{Integer, WireValue};
/// use usecases_type_selection::to_wire_value;
///
/// assert_eq!(to_wire_value(&Integer::from(-9), None).unwrap(), WireValue::I64(-9));
/// ```
pub fn to_wire_value(value: &Integer, hint: Option<KindHint>) -> Result<WireValue, IntError> {
    let kind = select_kind(value, hint)?;
    infrastructure_external_format::encode_tagged_integer(kind, value)
}
