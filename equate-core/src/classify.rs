// equate-core - Shape classification
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Classification of values into comparison shapes.
//!
//! Every value is classified exactly once per comparison step. The shape
//! decides which rule compares it; the [`KindTag`] decides whether two
//! values may be compared structurally at all.

use std::borrow::Cow;

use equate_value::{
    Class, Coerce, Coercion, Date, ElementKind, Function, MapObject, Object, Pattern, SetObject,
    TypedArray, Value, Vector,
};

/// How a value takes part in comparison.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// Undefined, null, boolean, number, bigint, string or symbol
    Primitive(&'a Value),
    /// Function, compared by identity only
    FunctionRef(&'a Function),
    /// Array
    Sequence(&'a Vector<Value>),
    /// Plain object or class instance without coercion overrides
    Record(&'a Object),
    /// Date
    DateInstant(&'a Date),
    /// Regular expression
    Pattern(&'a Pattern),
    /// Map
    AssociativeMap(&'a MapObject),
    /// Set
    MembershipSet(&'a SetObject),
    /// Typed array
    FixedBuffer(&'a TypedArray),
    /// Class instance whose class overrides value or text coercion
    Coercible(&'a Object, Coercion<'a>),
}

/// Nominal type of an object-like value.
///
/// Two values with different tags are never equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindTag<'a> {
    Function,
    Array,
    /// `None` is the plain object constructor
    Object(Option<&'a Class>),
    Date,
    RegExp,
    Map,
    Set,
    TypedArray(ElementKind),
}

impl<'a> Shape<'a> {
    /// Classify a value.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::String(_)
            | Value::Symbol(_) => Shape::Primitive(value),
            Value::Function(func) => Shape::FunctionRef(func),
            Value::Array(items) => Shape::Sequence(items),
            Value::Object(object) => match object.coercion() {
                Some(coercion) => Shape::Coercible(object, coercion),
                None => Shape::Record(object),
            },
            Value::Date(date) => Shape::DateInstant(date),
            Value::RegExp(pattern) => Shape::Pattern(pattern),
            Value::Map(map) => Shape::AssociativeMap(map),
            Value::Set(set) => Shape::MembershipSet(set),
            Value::TypedArray(buffer) => Shape::FixedBuffer(buffer),
        }
    }

    /// Nominal type, or `None` for primitives.
    pub fn kind_tag(&self) -> Option<KindTag<'a>> {
        match *self {
            Shape::Primitive(_) => None,
            Shape::FunctionRef(_) => Some(KindTag::Function),
            Shape::Sequence(_) => Some(KindTag::Array),
            Shape::Record(object) | Shape::Coercible(object, _) => {
                Some(KindTag::Object(object.class()))
            }
            Shape::DateInstant(_) => Some(KindTag::Date),
            Shape::Pattern(_) => Some(KindTag::RegExp),
            Shape::AssociativeMap(_) => Some(KindTag::Map),
            Shape::MembershipSet(_) => Some(KindTag::Set),
            Shape::FixedBuffer(buffer) => Some(KindTag::TypedArray(buffer.kind())),
        }
    }

    /// Own enumerable string-keyed properties, for shapes compared as
    /// plain records.
    ///
    /// Maps and sets keep their contents out of band, so they expose none.
    /// Typed arrays expose one property per index.
    pub fn own_properties(&self) -> Option<OwnProperties<'a>> {
        match *self {
            Shape::Record(object) => Some(OwnProperties::Object(object)),
            Shape::FixedBuffer(buffer) => Some(OwnProperties::Indexed(buffer)),
            Shape::AssociativeMap(_) | Shape::MembershipSet(_) => Some(OwnProperties::Empty),
            _ => None,
        }
    }

    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Primitive(_) => "primitive",
            Shape::FunctionRef(_) => "function",
            Shape::Sequence(_) => "sequence",
            Shape::Record(_) => "record",
            Shape::DateInstant(_) => "date",
            Shape::Pattern(_) => "pattern",
            Shape::AssociativeMap(_) => "map",
            Shape::MembershipSet(_) => "set",
            Shape::FixedBuffer(_) => "typed array",
            Shape::Coercible(_, _) => "coercible",
        }
    }
}

/// Own-property view used by the record rule.
#[derive(Clone, Copy)]
pub enum OwnProperties<'a> {
    Object(&'a Object),
    Indexed(&'a TypedArray),
    Empty,
}

/// Parse a canonical array index ("0", "17"; not "01" or "+1").
fn parse_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

impl<'a> OwnProperties<'a> {
    pub fn len(&self) -> usize {
        match self {
            OwnProperties::Object(object) => object.len(),
            OwnProperties::Indexed(buffer) => buffer.len(),
            OwnProperties::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            OwnProperties::Object(object) => object.contains_key(key),
            OwnProperties::Indexed(buffer) => parse_index(key).is_some_and(|i| i < buffer.len()),
            OwnProperties::Empty => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<Cow<'a, Value>> {
        match *self {
            OwnProperties::Object(object) => object.get(key).map(Cow::Borrowed),
            OwnProperties::Indexed(buffer) => parse_index(key)
                .and_then(|i| buffer.get(i))
                .map(Cow::Owned),
            OwnProperties::Empty => None,
        }
    }

    /// All properties as key-value pairs.
    pub fn entries(&self) -> Vec<(Cow<'a, str>, Cow<'a, Value>)> {
        match *self {
            OwnProperties::Object(object) => object
                .iter()
                .map(|(key, value)| (Cow::Borrowed(key), Cow::Borrowed(value)))
                .collect(),
            OwnProperties::Indexed(buffer) => (0..buffer.len())
                .filter_map(|i| Some((Cow::Owned(i.to_string()), Cow::Owned(buffer.get(i)?))))
                .collect(),
            OwnProperties::Empty => Vec::new(),
        }
    }
}
