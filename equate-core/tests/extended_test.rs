// equate-core - Map, set and typed array integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the extended profile, and for how the base profile
//! treats the kinds it does not know.
//!
//! Tests for: map keys by identity, map values by deep equality, set
//! membership by identity, typed array element kinds, base-profile fallback

mod common;

use common::*;

fn ext() -> Comparator {
    Comparator::extended()
}

fn map(pairs: Vec<(Value, Value)>) -> Value {
    Value::map(pairs)
}

fn set(members: Vec<Value>) -> Value {
    Value::set(members)
}

// =============================================================================
// Maps
// =============================================================================

#[test]
fn test_empty_maps() {
    assert_equal!(ext(), map(vec![]), map(vec![]));
}

#[test]
fn test_maps_ignore_insertion_order() {
    assert_equal!(
        ext(),
        map(vec![(text("a"), num(1.0)), (text("b"), num(2.0))]),
        map(vec![(text("b"), num(2.0)), (text("a"), num(1.0))])
    );
}

#[test]
fn test_map_values_compare_deeply() {
    assert_equal!(
        ext(),
        map(vec![(text("a"), obj(&[("x", num(1.0))]))]),
        map(vec![(text("a"), obj(&[("x", num(1.0))]))])
    );
    assert_not_equal!(
        ext(),
        map(vec![(text("a"), obj(&[("x", num(1.0))]))]),
        map(vec![(text("a"), obj(&[("x", num(2.0))]))])
    );
}

#[test]
fn test_maps_of_different_size() {
    assert_not_equal!(
        ext(),
        map(vec![(text("a"), num(1.0))]),
        map(vec![(text("a"), num(1.0)), (text("b"), num(2.0))])
    );
}

#[test]
fn test_map_with_missing_key_and_undefined_value() {
    assert_not_equal!(
        ext(),
        map(vec![(text("a"), Value::Undefined)]),
        map(vec![(text("b"), Value::Undefined)])
    );
}

#[test]
fn test_map_object_keys_match_by_identity() {
    let key = obj(&[]);
    assert_equal!(
        ext(),
        map(vec![(key.clone(), num(1.0))]),
        map(vec![(key, num(1.0))])
    );
    assert_not_equal!(
        ext(),
        map(vec![(obj(&[]), num(1.0))]),
        map(vec![(obj(&[]), num(1.0))])
    );
}

#[test]
fn test_map_nan_and_zero_keys() {
    assert_equal!(
        ext(),
        map(vec![(num(f64::NAN), text("n")), (num(-0.0), text("z"))]),
        map(vec![(num(0.0), text("z")), (num(f64::NAN), text("n"))])
    );
}

#[test]
fn test_later_insert_overwrites() {
    let built = map(vec![(text("a"), num(1.0)), (text("a"), num(2.0))]);
    assert_equal!(ext(), built, map(vec![(text("a"), num(2.0))]));
}

// =============================================================================
// Sets
// =============================================================================

#[test]
fn test_sets_ignore_order() {
    assert_equal!(
        ext(),
        set(vec![num(1.0), text("a")]),
        set(vec![text("a"), num(1.0)])
    );
}

#[test]
fn test_sets_with_different_members() {
    assert_not_equal!(ext(), set(vec![num(1.0)]), set(vec![num(2.0)]));
    assert_not_equal!(ext(), set(vec![num(1.0)]), set(vec![num(1.0), num(2.0)]));
}

#[test]
fn test_set_members_match_by_identity() {
    let shared = obj(&[("a", num(1.0))]);
    assert_equal!(ext(), set(vec![shared.clone()]), set(vec![shared]));
    assert_not_equal!(
        ext(),
        set(vec![obj(&[("a", num(1.0))])]),
        set(vec![obj(&[("a", num(1.0))])])
    );
}

#[test]
fn test_set_deduplicates_members() {
    assert_equal!(
        ext(),
        set(vec![num(1.0), num(1.0), num(f64::NAN), num(f64::NAN)]),
        set(vec![num(f64::NAN), num(1.0)])
    );
}

#[test]
fn test_map_is_not_set() {
    assert_not_equal!(ext(), map(vec![]), set(vec![]));
    assert_not_equal!(ext(), map(vec![]), obj(&[]));
    assert_not_equal!(ext(), set(vec![]), arr(vec![]));
}

// =============================================================================
// Typed arrays
// =============================================================================

#[test]
fn test_typed_arrays_with_same_elements() {
    assert_equal!(
        ext(),
        Value::typed_array(vec![1u8, 2, 3]),
        Value::typed_array(vec![1u8, 2, 3])
    );
}

#[test]
fn test_typed_arrays_with_different_elements() {
    assert_not_equal!(
        ext(),
        Value::typed_array(vec![1i32, 2]),
        Value::typed_array(vec![1i32, 3])
    );
    assert_not_equal!(
        ext(),
        Value::typed_array(vec![1i32, 2]),
        Value::typed_array(vec![1i32, 2, 3])
    );
}

#[test]
fn test_typed_arrays_of_different_kinds() {
    assert_not_equal!(
        ext(),
        Value::typed_array(vec![1u8]),
        Value::typed_array(vec![1i8])
    );
    assert_not_equal!(
        ext(),
        Value::typed_array(vec![1u8]),
        Value::typed_array(TypedArray::uint8_clamped(&[1.0]))
    );
}

#[test]
fn test_typed_array_differs_from_plain_array() {
    assert_not_equal!(
        ext(),
        Value::typed_array(vec![1.0f64, 2.0]),
        arr(vec![num(1.0), num(2.0)])
    );
}

#[test]
fn test_float_elements_use_strict_comparison() {
    assert_not_equal!(
        ext(),
        Value::typed_array(vec![f64::NAN]),
        Value::typed_array(vec![f64::NAN])
    );
    assert_equal!(
        ext(),
        Value::typed_array(vec![0.0f32]),
        Value::typed_array(vec![-0.0f32])
    );
}

#[test]
fn test_bigint_typed_arrays() {
    assert_equal!(
        ext(),
        Value::typed_array(vec![i64::MIN, 0, i64::MAX]),
        Value::typed_array(vec![i64::MIN, 0, i64::MAX])
    );
    assert_not_equal!(
        ext(),
        Value::typed_array(vec![u64::MAX]),
        Value::typed_array(vec![0u64])
    );
}

// =============================================================================
// Base profile on extended kinds
// =============================================================================

#[test]
fn test_base_profile_sees_no_map_contents() {
    let a = map(vec![(text("a"), num(1.0))]);
    let b = map(vec![(text("b"), num(2.0))]);
    assert_equal!(a, b);
    assert_not_equal!(ext(), a, b);
}

#[test]
fn test_base_profile_sees_no_set_contents() {
    assert_equal!(set(vec![num(1.0)]), set(vec![num(2.0)]));
}

#[test]
fn test_base_profile_keeps_kind_gate() {
    assert_not_equal!(map(vec![]), set(vec![]));
    assert_not_equal!(map(vec![]), obj(&[]));
}

#[test]
fn test_base_profile_compares_typed_arrays_by_index() {
    assert_equal!(
        Value::typed_array(vec![1u16, 2]),
        Value::typed_array(vec![1u16, 2])
    );
    assert_not_equal!(
        Value::typed_array(vec![1u16, 2]),
        Value::typed_array(vec![1u16, 3])
    );
    assert_not_equal!(
        Value::typed_array(vec![1u16]),
        Value::typed_array(vec![1u32])
    );
}

#[test]
fn test_base_profile_typed_array_nan_elements() {
    assert_equal!(
        Value::typed_array(vec![f64::NAN]),
        Value::typed_array(vec![f64::NAN])
    );
}

#[test]
fn test_extended_profile_parses_from_config_text() {
    let profile: Profile = "es6".parse().unwrap();
    let a = set(vec![num(1.0)]);
    let b = set(vec![num(2.0)]);
    assert!(!Comparator::new(profile).equal(&a, &b).unwrap());
}
