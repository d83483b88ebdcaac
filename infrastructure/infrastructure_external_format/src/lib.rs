//! Infrastructure Layer: External Format
//!
//! Provides conversion between tagged wire values and native arbitrary
//! precision integers.
//!
//! ## Overview
//!
//! The `infrastructure_external_format` crate is part of the infrastructure layer.
//! It inspects the tag of a `WireValue`, extracts the words of integer-tagged
//! values in most-significant-first order and hands them to the sized integer
//! codec. Non-integer tags are rejected with `IntError::TypeMismatch`.
//!
//! ## Modules
//!
//! - **[`decoding`](decoding/index.html)**: `decode_tagged_integer`, the decoder
//!   entry point for all eight integer tags
//!
//! - **[`encoding`](encoding/index.html)**: `encode_tagged_integer`, building
//!   64/128/256-bit tagged values from a kind and a value
//!
//! ## See Also
//!
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): word codec
//! - [`usecases_type_selection`](../../usecases/usecases_type_selection/index.html): kind selection

pub mod decoding;
pub mod encoding;

pub use decoding::{decode_sized_integer, decode_tagged_integer};
pub use encoding::{encode_tagged_integer, int_kind_for_tag, sized_to_wire_value};
