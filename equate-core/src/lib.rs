// equate-core - Deep equality for equate values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # equate-core
//!
//! Structural ("deep") equality over [`equate_value::Value`].
//!
//! ```rust
//! use equate_core::{Comparator, equal};
//! use equate_value::Value;
//!
//! let a = Value::object([("xs", Value::array(vec![Value::number(1.0)]))]);
//! let b = Value::object([("xs", Value::array(vec![Value::number(1.0)]))]);
//! assert!(equal(&a, &b).unwrap());
//!
//! let m1 = Value::map(vec![(Value::string("k"), Value::number(1.0))]);
//! let m2 = Value::map(vec![(Value::string("k"), Value::number(2.0))]);
//! assert!(!Comparator::extended().equal(&m1, &m2).unwrap());
//! ```
//!
//! Two profiles exist. [`Profile::Base`] handles primitives, arrays,
//! objects, dates, regular expressions, functions and coercion overrides.
//! [`Profile::Extended`] additionally compares maps, sets and typed arrays
//! by content.

pub mod classify;
pub mod compare;
pub mod error;
pub mod profile;

pub use classify::{KindTag, OwnProperties, Shape};
pub use compare::{Comparator, equal, equal_extended};
pub use error::{Error, ParseProfileError, Result};
pub use profile::Profile;
