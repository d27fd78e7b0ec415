// equate-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared builders and assertions for comparator integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`num`], [`text`] - Primitive builders
//! - [`arr`] - Array from elements
//! - [`obj`] - Plain object from `(key, value)` pairs
//! - [`date`] - Date from milliseconds
//! - [`re`] - Regular expression from source and flags
//!
//! # Macros
//!
//! - [`assert_equal!`] - Assert both directions compare equal
//! - [`assert_not_equal!`] - Assert both directions compare unequal

#![allow(dead_code, unused_imports)]

pub use equate_core::{Comparator, Profile, equal, equal_extended};
pub use equate_value::{
    Class, Date, Error, MapObject, Object, SetObject, Symbol, TypedArray, Value,
};

/// Number value.
pub fn num(n: f64) -> Value {
    Value::number(n)
}

/// String value.
pub fn text(s: &str) -> Value {
    Value::string(s)
}

/// Array value.
pub fn arr(items: Vec<Value>) -> Value {
    Value::array(items)
}

/// Plain object value.
pub fn obj(pairs: &[(&str, Value)]) -> Value {
    Value::object(pairs.iter().map(|(k, v)| (*k, v.clone())))
}

/// Date value from epoch milliseconds.
pub fn date(millis: f64) -> Value {
    Value::date(Date::from_millis(millis))
}

/// Regular expression value. Panics on invalid flags.
pub fn re(source: &str, flags: &str) -> Value {
    Value::regexp(source, flags).expect("test flags should be valid")
}

/// Compare in both directions with the given comparator, checking symmetry.
pub fn compare_both(cmp: Comparator, a: &Value, b: &Value) -> bool {
    let forward = cmp.equal(a, b).expect("comparison should not fail");
    let backward = cmp.equal(b, a).expect("comparison should not fail");
    assert_eq!(
        forward, backward,
        "comparison is not symmetric for {:?} and {:?}",
        a, b
    );
    forward
}

/// Assert two values compare equal (base profile unless a comparator is
/// given), in both directions.
#[macro_export]
macro_rules! assert_equal {
    ($a:expr, $b:expr) => {
        $crate::assert_equal!($crate::common::Comparator::base(), $a, $b)
    };
    ($cmp:expr, $a:expr, $b:expr) => {{
        let (a, b) = (&$a, &$b);
        assert!(
            $crate::common::compare_both($cmp, a, b),
            "expected {:?} to equal {:?}",
            a,
            b
        );
    }};
}

/// Assert two values compare unequal, in both directions.
#[macro_export]
macro_rules! assert_not_equal {
    ($a:expr, $b:expr) => {
        $crate::assert_not_equal!($crate::common::Comparator::base(), $a, $b)
    };
    ($cmp:expr, $a:expr, $b:expr) => {{
        let (a, b) = (&$a, &$b);
        assert!(
            !$crate::common::compare_both($cmp, a, b),
            "expected {:?} not to equal {:?}",
            a,
            b
        );
    }};
}
