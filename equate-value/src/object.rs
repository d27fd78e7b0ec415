// equate-value - Objects, classes and coercion hooks
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Objects are string-keyed property bags with an optional class.
//!
//! An object without a class is a plain object. A [`Class`] is a nominal
//! type compared by identity: two instances only share a kind when they were
//! created from the same `Class` handle. Classes may override how their
//! instances coerce to a primitive (`value_of`) or to text (`to_text`); the
//! [`Coerce`] trait reports which override applies without running it.

use std::fmt;
use std::rc::Rc;

use im::OrdMap;

use crate::error::Result;
use crate::value::Value;

/// Value-coercion hook: produce a primitive stand-in for an instance.
pub type ValueHook = dyn Fn(&Object) -> Result<Value>;

/// Text-coercion hook: produce a string stand-in for an instance.
pub type TextHook = dyn Fn(&Object) -> Result<String>;

// ============================================================================
// Class
// ============================================================================

/// A nominal object type.
#[derive(Clone)]
pub struct Class {
    inner: Rc<ClassDef>,
}

struct ClassDef {
    name: Rc<str>,
    value_of: Option<Box<ValueHook>>,
    to_text: Option<Box<TextHook>>,
}

impl Class {
    /// Create a class with the default coercion behaviour.
    pub fn new(name: &str) -> Self {
        Class::builder(name).build()
    }

    /// Start defining a class with coercion overrides.
    pub fn builder(name: &str) -> ClassBuilder {
        ClassBuilder {
            name: Rc::from(name),
            value_of: None,
            to_text: None,
        }
    }

    /// Get the class name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The value-coercion override, if any.
    pub fn value_of_hook(&self) -> Option<&ValueHook> {
        self.inner.value_of.as_deref()
    }

    /// The text-coercion override, if any.
    pub fn to_text_hook(&self) -> Option<&TextHook> {
        self.inner.to_text.as_deref()
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<class {}>", self.name())
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Class {}

/// Builder for classes with coercion overrides.
pub struct ClassBuilder {
    name: Rc<str>,
    value_of: Option<Box<ValueHook>>,
    to_text: Option<Box<TextHook>>,
}

impl ClassBuilder {
    /// Override value coercion.
    pub fn value_of(mut self, hook: impl Fn(&Object) -> Result<Value> + 'static) -> Self {
        self.value_of = Some(Box::new(hook));
        self
    }

    /// Override text coercion.
    pub fn to_text(mut self, hook: impl Fn(&Object) -> Result<String> + 'static) -> Self {
        self.to_text = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Class {
        Class {
            inner: Rc::new(ClassDef {
                name: self.name,
                value_of: self.value_of,
                to_text: self.to_text,
            }),
        }
    }
}

// ============================================================================
// Coercion
// ============================================================================

/// The coercion override an object exposes.
#[derive(Clone, Copy)]
pub enum Coercion<'a> {
    /// Compare by the primitive the hook returns
    ValueOf(&'a ValueHook),
    /// Compare by the text the hook returns
    ToText(&'a TextHook),
}

impl fmt::Debug for Coercion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coercion::ValueOf(_) => write!(f, "ValueOf"),
            Coercion::ToText(_) => write!(f, "ToText"),
        }
    }
}

/// Capability query for non-default coercion.
pub trait Coerce {
    /// Which override applies, if any. Value coercion wins over text.
    ///
    /// Must not invoke the hook.
    fn coercion(&self) -> Option<Coercion<'_>>;
}

// ============================================================================
// Object
// ============================================================================

/// A plain object or class instance.
#[derive(Clone, Default)]
pub struct Object {
    class: Option<Class>,
    properties: OrdMap<Rc<str>, Value>,
}

impl Object {
    /// Create an empty plain object.
    pub fn new() -> Self {
        Object::default()
    }

    /// Create an empty instance of `class`.
    pub fn with_class(class: Class) -> Self {
        Object {
            class: Some(class),
            properties: OrdMap::new(),
        }
    }

    /// Create a plain object from key-value pairs.
    pub fn from_pairs<K: Into<Rc<str>>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Object {
            class: None,
            properties: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Set a property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Rc<str>>, value: Value) -> Option<Value> {
        self.properties.insert(key.into(), value)
    }

    /// Builder-style [`Object::insert`].
    pub fn with(mut self, key: impl Into<Rc<str>>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// The class, or `None` for plain objects.
    pub fn class(&self) -> Option<&Class> {
        self.class.as_ref()
    }

    /// Get an own property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Check for an own property (present even when set to `Undefined`).
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Own property names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_ref())
    }

    /// Own properties as key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl Coerce for Object {
    fn coercion(&self) -> Option<Coercion<'_>> {
        let class = self.class.as_ref()?;
        match class.value_of_hook() {
            Some(hook) => Some(Coercion::ValueOf(hook)),
            None => class.to_text_hook().map(Coercion::ToText),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(class) = &self.class {
            write!(f, "{} ", class.name())?;
        }
        if self.properties.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, " }}")
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
