//! Integration tests for infrastructure_bignum_encoding crate
//!
//! These tests verify that sized integer encoding and decoding work correctly
//! across every kind, including boundary values and random round trips.

use entities_large_int::{IntError, IntKind, Integer, Signedness};
use infrastructure_bignum_encoding::word_codec::power_of_two;
use infrastructure_bignum_encoding::*;
use proptest::prelude::*;

/// Compose a 256-bit value from a high 128-bit half and a low unsigned half
fn compose_256(high: Integer, low: u128) -> Integer {
    (high << 128u64) + Integer::from(low)
}

#[test]
fn test_boundaries_for_every_kind() {
    for kind in IntKind::ALL {
        let min = SizedInteger::min_for(kind);
        let max = SizedInteger::max_for(kind);

        let encoded_min = SizedInteger::encode(kind, &min).unwrap();
        let encoded_max = SizedInteger::encode(kind, &max).unwrap();
        assert_eq!(encoded_min.len(), kind.word_count());
        assert_eq!(SizedInteger::decode(kind, &encoded_min).unwrap(), min);
        assert_eq!(SizedInteger::decode(kind, &encoded_max).unwrap(), max);

        let below = min - Integer::from(1);
        let above = max + Integer::from(1);
        assert!(
            matches!(SizedInteger::encode(kind, &below), Err(IntError::Range { .. })),
            "{} must reject its minimum minus one",
            kind
        );
        assert!(
            matches!(SizedInteger::encode(kind, &above), Err(IntError::Range { .. })),
            "{} must reject its maximum plus one",
            kind
        );
    }
}

#[test]
fn test_signed_extremes_have_expected_patterns() {
    let top_bit = 0x8000_0000_0000_0000u64;
    let below_top = 0x7fff_ffff_ffff_ffffu64;

    assert_eq!(
        SizedInteger::encode(IntKind::I256, &-power_of_two(255)).unwrap(),
        vec![top_bit, 0, 0, 0]
    );
    assert_eq!(
        SizedInteger::encode(IntKind::I256, &(power_of_two(255) - Integer::from(1))).unwrap(),
        vec![below_top, u64::MAX, u64::MAX, u64::MAX]
    );
    assert_eq!(
        SizedInteger::encode(IntKind::I128, &-power_of_two(127)).unwrap(),
        vec![top_bit, 0]
    );
}

#[test]
fn test_sign_bit_decoding_128() {
    let words = [0x8000_0000_0000_0000u64, 0x0000_0000_0000_0000];
    assert_eq!(SizedInteger::decode(IntKind::I128, &words).unwrap(), -power_of_two(127));
    assert_eq!(SizedInteger::decode(IntKind::U128, &words).unwrap(), power_of_two(127));
}

#[test]
fn test_sign_bit_decoding_256() {
    let words = [0x8000_0000_0000_0000u64, 0, 0, 0];
    assert_eq!(SizedInteger::decode(IntKind::I256, &words).unwrap(), -power_of_two(255));
    assert_eq!(SizedInteger::decode(IntKind::U256, &words).unwrap(), power_of_two(255));
}

#[test]
fn test_word_count_mismatch() {
    let three = [1u64, 2, 3];
    assert!(matches!(
        SizedInteger::decode(IntKind::U256, &three),
        Err(IntError::Format { .. })
    ));
    assert!(matches!(
        SizedInteger::decode(IntKind::I128, &three),
        Err(IntError::Format { .. })
    ));
    assert!(matches!(
        SizedInteger::decode(IntKind::U64, &[1, 2]),
        Err(IntError::Format { .. })
    ));
}

#[test]
fn test_word_codec_matches_native_i128_layout() {
    let value: i128 = -0x0123_4567_89ab_cdef_0011_2233_4455_6677;
    let words = split(&Integer::from(value), WordWidth::W64, 2, Signedness::Signed).unwrap();
    let bits = value as u128;
    assert_eq!(words, vec![(bits >> 64) as u64, bits as u64]);
    assert_eq!(join(&words, WordWidth::W64, Signedness::Signed).unwrap(), Integer::from(value));
}

#[test]
fn test_32_and_64_bit_layouts_agree() {
    let value = compose_256(Integer::from(-12345i128), 0xdead_beef_u128);
    let words64 = SizedInteger::encode(IntKind::I256, &value).unwrap();
    let words32 = SizedInteger::encode_words32(IntKind::I256, &value).unwrap();
    assert_eq!(words32.len(), 8);
    for (i, word) in words64.iter().enumerate() {
        let joined = (u64::from(words32[2 * i]) << 32) | u64::from(words32[2 * i + 1]);
        assert_eq!(joined, *word);
    }
    assert_eq!(SizedInteger::decode_words32(IntKind::I256, &words32).unwrap(), value);
}

proptest! {
    #[test]
    fn prop_u64_round_trip(v in any::<u64>()) {
        let value = Integer::from(v);
        let words = SizedInteger::encode(IntKind::U64, &value).unwrap();
        prop_assert_eq!(&words, &vec![v]);
        prop_assert_eq!(SizedInteger::decode(IntKind::U64, &words).unwrap(), value);
    }

    #[test]
    fn prop_i64_round_trip(v in any::<i64>()) {
        let value = Integer::from(v);
        let words = SizedInteger::encode(IntKind::I64, &value).unwrap();
        prop_assert_eq!(&words, &vec![v as u64]);
        prop_assert_eq!(SizedInteger::decode(IntKind::I64, &words).unwrap(), value);
    }

    #[test]
    fn prop_u128_round_trip(v in any::<u128>()) {
        let value = Integer::from(v);
        let words = SizedInteger::encode(IntKind::U128, &value).unwrap();
        prop_assert_eq!(SizedInteger::decode(IntKind::U128, &words).unwrap(), value);
    }

    #[test]
    fn prop_i128_round_trip(v in any::<i128>()) {
        let value = Integer::from(v);
        let words = SizedInteger::encode(IntKind::I128, &value).unwrap();
        prop_assert_eq!(SizedInteger::decode(IntKind::I128, &words).unwrap(), value);
    }

    #[test]
    fn prop_u256_round_trip(high in any::<u128>(), low in any::<u128>()) {
        let value = compose_256(Integer::from(high), low);
        let words = SizedInteger::encode(IntKind::U256, &value).unwrap();
        prop_assert_eq!(SizedInteger::decode(IntKind::U256, &words).unwrap(), value);
    }

    #[test]
    fn prop_i256_round_trip(high in any::<i128>(), low in any::<u128>()) {
        let value = compose_256(Integer::from(high), low);
        let words = SizedInteger::encode(IntKind::I256, &value).unwrap();
        prop_assert_eq!(SizedInteger::decode(IntKind::I256, &words).unwrap(), value);
    }

    #[test]
    fn prop_any_i256_pattern_decodes_in_range(words in proptest::array::uniform4(any::<u64>())) {
        let value = SizedInteger::decode(IntKind::I256, &words).unwrap();
        prop_assert!(IntKind::I256.contains(&value));
        prop_assert_eq!(SizedInteger::encode(IntKind::I256, &value).unwrap(), words.to_vec());
    }
}
