//! Infrastructure Layer: Bignum Encoding
//!
//! Provides encoding and decoding of arbitrary precision integers to and from
//! fixed-width word groups.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure layer.
//! It converts between `malachite::Integer` values and the word groups carried
//! on the wire for 64-, 128- and 256-bit integers.
//!
//! ## Codecs
//!
//! - **[`word_codec`](word_codec/index.html)**: Splits integers into 32- or
//!   64-bit words (most significant first) and joins them back, including the
//!   two's-complement conversion for signed groups.
//!
//! - **[`sized_integer`](sized_integer/index.html)**: Range-checked encoding and
//!   length-checked decoding for the six core kinds.
//!
//! ## See Also
//!
//! - [`entities_large_int`](../entities_large_int/index.html): kinds and errors
//! - [`infrastructure_external_format`](../infrastructure_external_format/index.html):
//!   decoding of tagged wire values

pub mod sized_integer;
pub mod word_codec;

pub use sized_integer::SizedInteger;
pub use word_codec::{join, split, WordWidth};
