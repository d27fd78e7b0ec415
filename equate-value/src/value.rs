// equate-value - Value type for equate
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for equate.
//!
//! `Value` is the closed enum every comparison operates on. Primitive
//! variants are held inline; every object-like variant lives behind an `Rc`,
//! so cloning a `Value` shares the instance and instance identity is pointer
//! identity.

use std::fmt;
use std::mem;
use std::rc::Rc;

use im::Vector;
use num_bigint::BigInt;

use crate::collections::{MapObject, SetObject};
use crate::date::Date;
use crate::error::Result;
use crate::function::Function;
use crate::object::{Class, Object};
use crate::pattern::Pattern;
use crate::symbol::Symbol;
use crate::typed_array::TypedArray;

/// A dynamic value.
///
/// Primitives (`Undefined` through `Symbol`) compare by content, except
/// symbols which are unique. Everything from `Function` onwards is an
/// object-like value with instance identity.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value
    #[default]
    Undefined,
    /// The explicit null marker
    Null,
    /// Boolean true or false
    Bool(bool),
    /// IEEE-754 double
    Number(f64),
    /// Arbitrary precision integer
    BigInt(Rc<BigInt>),
    /// Immutable text
    String(Rc<str>),
    /// Unique symbol
    Symbol(Symbol),
    /// Native function, compared by identity only
    Function(Function),
    /// Ordered, index-addressable sequence
    Array(Rc<Vector<Value>>),
    /// Plain object or class instance with own enumerable properties
    Object(Rc<Object>),
    /// Instant in time
    Date(Rc<Date>),
    /// Regular expression
    RegExp(Rc<Pattern>),
    /// Insertion-ordered map with identity-based keys
    Map(Rc<MapObject>),
    /// Insertion-ordered set with identity-based membership
    Set(Rc<SetObject>),
    /// Fixed-width numeric buffer
    TypedArray(Rc<TypedArray>),
}

impl Value {
    /// Create a number value
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a big integer value
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(Rc::new(n.into()))
    }

    /// Create a string value
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Create a symbol value
    pub fn symbol(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }

    /// Create a named native function value
    pub fn function(
        name: &str,
        func: impl Fn(&[Value]) -> Result<Value> + 'static,
    ) -> Self {
        Value::Function(Function::new(name, func))
    }

    /// Create an empty array
    pub fn empty_array() -> Self {
        Value::Array(Rc::new(Vector::new()))
    }

    /// Create an array from elements
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(elements.into_iter().collect()))
    }

    /// Create a plain object from key-value pairs
    pub fn object<K: Into<Rc<str>>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::from_object(Object::from_pairs(pairs))
    }

    /// Create an instance of `class` from key-value pairs
    pub fn instance<K: Into<Rc<str>>>(
        class: &Class,
        pairs: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        let mut object = Object::with_class(class.clone());
        for (key, value) in pairs {
            object.insert(key, value);
        }
        Value::from_object(object)
    }

    /// Wrap an already built object
    pub fn from_object(object: Object) -> Self {
        Value::Object(Rc::new(object))
    }

    /// Create a date value
    pub fn date(date: Date) -> Self {
        Value::Date(Rc::new(date))
    }

    /// Create a regular expression value (fails only on invalid flags)
    pub fn regexp(source: &str, flags: &str) -> Result<Self> {
        Ok(Value::RegExp(Rc::new(Pattern::new(source, flags)?)))
    }

    /// Create a map from key-value pairs (later duplicates overwrite)
    pub fn map(pairs: Vec<(Value, Value)>) -> Self {
        Value::Map(Rc::new(pairs.into_iter().collect()))
    }

    /// Create a set from elements (duplicates are dropped)
    pub fn set(elements: Vec<Value>) -> Self {
        Value::Set(Rc::new(elements.into_iter().collect()))
    }

    /// Create a typed array value
    pub fn typed_array(buffer: impl Into<TypedArray>) -> Self {
        Value::TypedArray(Rc::new(buffer.into()))
    }

    /// Check if this value is the not-a-number state
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Check if this value is object-like (has instance identity)
    pub fn is_object(&self) -> bool {
        self.addr().is_some()
    }

    /// Check if this value is a primitive
    pub fn is_primitive(&self) -> bool {
        !self.is_object()
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::TypedArray(t) => t.kind().name(),
        }
    }

    /// Address of the shared instance for object-like values.
    pub(crate) fn addr(&self) -> Option<usize> {
        match self {
            Value::Function(f) => Some(f.addr()),
            Value::Array(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Object(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Date(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::RegExp(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Map(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Set(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::TypedArray(rc) => Some(Rc::as_ptr(rc) as usize),
            _ => None,
        }
    }

    /// Check if both values are the same object-like instance.
    pub fn same_instance(&self, other: &Value) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
            && matches!((self.addr(), other.addr()), (Some(a), Some(b)) if a == b)
    }

    /// Strict comparison: primitives by value, objects by identity.
    ///
    /// `+0` equals `-0` and `NaN` equals nothing, itself included.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            _ => self.same_instance(other),
        }
    }

    /// Like [`Value::strict_equals`], except `NaN` equals `NaN`.
    ///
    /// This is the key comparison used by maps and sets.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self.strict_equals(other),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        // Rust already prints NaN, -0 and integral floats without a fraction.
        write!(f, "{}", n)
    }
}

fn fmt_list<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Function(func) => write!(f, "[Function: {}]", func.name()),
            Value::Array(items) => {
                write!(f, "[")?;
                fmt_list(f, items.iter())?;
                write!(f, "]")
            }
            Value::Object(object) => write!(f, "{}", object),
            Value::Date(date) => write!(f, "{}", date),
            Value::RegExp(pattern) => write!(f, "{}", pattern),
            Value::Map(map) => {
                write!(f, "Map({}) {{", map.len())?;
                for (i, (key, value)) in map.iter().enumerate() {
                    let sep = if i > 0 { "," } else { "" };
                    write!(f, "{} {} => {}", sep, key, value)?;
                }
                if map.is_empty() {
                    write!(f, "}}")
                } else {
                    write!(f, " }}")
                }
            }
            Value::Set(set) => {
                write!(f, "Set({}) {{", set.len())?;
                if set.is_empty() {
                    return write!(f, "}}");
                }
                write!(f, " ")?;
                fmt_list(f, set.iter())?;
                write!(f, " }}")
            }
            Value::TypedArray(buffer) => {
                write!(f, "{}({}) [", buffer.kind().name(), buffer.len())?;
                let elements: Vec<Value> = (0..buffer.len()).filter_map(|i| buffer.get(i)).collect();
                fmt_list(f, elements.iter())?;
                write!(f, "]")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
