// equate - Structural equality over dynamic values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # equate
//!
//! Deep equality for a dynamic value model: two values are equal when they
//! are interchangeable in content, even if they are distinct instances.
//!
//! ```rust
//! use equate::{Date, Value, equal, equal_extended};
//!
//! let a = Value::date(Date::parse("2023-01-01T00:00:00Z").unwrap());
//! let b = Value::date(Date::from_millis(1_672_531_200_000.0));
//! assert!(equal(&a, &b).unwrap());
//!
//! let s1 = Value::set(vec![Value::number(1.0), Value::number(2.0)]);
//! let s2 = Value::set(vec![Value::number(2.0), Value::number(1.0)]);
//! assert!(equal_extended(&s1, &s2).unwrap());
//! ```
//!
//! See [`equate_core`] for the comparison rules and [`equate_value`] for the
//! value model.

pub use equate_core::{
    Comparator, KindTag, OwnProperties, ParseProfileError, Profile, Shape, equal, equal_extended,
};
pub use equate_value::{
    BigInt, Class, ClassBuilder, Coerce, Coercion, Date, ElementKind, Error, Function,
    MapObject, Object, Pattern, Result, SetObject, Symbol, TypedArray, Value, Vector,
};
