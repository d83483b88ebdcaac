//! API Facades Layer
//!
//! Provides the flat public surface of the large integer codec.
//!
//! Callers that do not care about the layered workspace layout use this crate
//! alone: it re-exports the entity types and exposes one function per
//! operation. All facades call underlying Rust modules from inner layers.
//!
//! ## Usage
//!
//! ```rust
//! use large_int_codec::{decode, encode, select_kind, Integer};
//!
//! let value = -(Integer::from(1u32) << 100u64);
//! let kind = select_kind(&value, None).unwrap();
//! let words = encode(kind, &value).unwrap();
//! assert_eq!(decode(kind, &words).unwrap(), value);
//! ```

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

pub mod codec_facades;
pub mod selection_facades;

// Re-export main facade functions
pub use codec_facades::*;
pub use selection_facades::*;

pub use entities_large_int::{
    BitWidth, IntError, IntKind, Integer, Signedness, WireTag, WireValue, Words128, Words256,
};
pub use infrastructure_debugging::{DebugLevel, DebugUtils};
pub use usecases_type_selection::{KindHint, LargeInt, MAX_SAFE_INTEGER};
