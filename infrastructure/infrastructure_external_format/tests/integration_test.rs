//! Integration tests for infrastructure_external_format
//!
//! Tests decoding of every integer tag, rejection of non-integer tags and
//! the encode/decode path through tagged wire values.

use entities_large_int::{IntError, IntKind, Integer, WireTag, WireValue, Words128, Words256};
use infrastructure_external_format::{decode_tagged_integer, encode_tagged_integer};

fn pow2(bits: u64) -> Integer {
    Integer::from(1u32) << bits
}

#[test]
fn test_decode_i128_sign_bit() {
    let value = WireValue::I128(Words128::new(0x8000_0000_0000_0000, 0));
    assert_eq!(decode_tagged_integer(&value).unwrap(), -pow2(127));

    let value = WireValue::U128(Words128::new(0x8000_0000_0000_0000, 0));
    assert_eq!(decode_tagged_integer(&value).unwrap(), pow2(127));
}

#[test]
fn test_decode_i256_extremes() {
    let min = WireValue::I256(Words256::new(0x8000_0000_0000_0000, 0, 0, 0));
    assert_eq!(decode_tagged_integer(&min).unwrap(), -pow2(255));

    let max = WireValue::I256(Words256::new(0x7fff_ffff_ffff_ffff, u64::MAX, u64::MAX, u64::MAX));
    assert_eq!(decode_tagged_integer(&max).unwrap(), pow2(255) - Integer::from(1));
}

#[test]
fn test_decode_256_halves() {
    let high = Words128::new(0, 1);
    let low = Words128::new(0, 0);
    let value = WireValue::U256(Words256::from_halves(high, low));
    assert_eq!(decode_tagged_integer(&value).unwrap(), pow2(128));
}

#[test]
fn test_non_integer_tags_are_rejected() {
    let values = vec![
        WireValue::Bool(false),
        WireValue::Void,
        WireValue::Timepoint(1),
        WireValue::Duration(1),
        WireValue::Bytes(vec![0xff]),
        WireValue::String("42".to_string()),
        WireValue::Symbol("42".to_string()),
    ];
    for value in values {
        let tag = value.tag();
        match decode_tagged_integer(&value) {
            Err(IntError::TypeMismatch { tag: reported }) => assert_eq!(reported, tag),
            other => panic!("expected TypeMismatch for {}, got {:?}", tag, other),
        }
    }
}

#[test]
fn test_type_mismatch_message_names_string_tag() {
    let err = decode_tagged_integer(&WireValue::String("hello".to_string())).unwrap_err();
    assert_eq!(err, IntError::TypeMismatch { tag: WireTag::String });
    assert!(err.to_string().contains("string"));
}

#[test]
fn test_encode_then_decode_every_kind() {
    for kind in IntKind::ALL {
        for value in [kind.min_value(), kind.max_value(), Integer::from(0), Integer::from(42)] {
            let wire = encode_tagged_integer(kind, &value).unwrap();
            assert_eq!(wire.tag(), WireTag::for_kind(kind));
            assert_eq!(decode_tagged_integer(&wire).unwrap(), value);
        }
    }
}
