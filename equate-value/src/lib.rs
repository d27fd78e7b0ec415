// equate-value - Dynamic value model for equate
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # equate-value
//!
//! The dynamic value model compared by `equate-core`.
//!
//! `Value` is a closed enum of primitives (undefined, null, booleans,
//! numbers, big integers, strings, symbols) and object-like values (functions,
//! arrays, objects, dates, regular expressions, maps, sets, typed arrays).
//! Object-like values are reference counted; a clone is the same instance.

pub mod collections;
pub mod convert;
pub mod date;
pub mod error;
pub mod function;
pub mod object;
pub mod pattern;
pub mod symbol;
pub mod typed_array;
pub mod value;

pub use collections::{MapObject, SetObject};
pub use date::Date;
pub use error::{Error, Result};
pub use function::{Function, NativeFn};
pub use im::Vector;
pub use num_bigint::BigInt;
pub use object::{Class, ClassBuilder, Coerce, Coercion, Object, TextHook, ValueHook};
pub use pattern::Pattern;
pub use symbol::Symbol;
pub use typed_array::{ElementKind, TypedArray};
pub use value::Value;
