// equate-value - Maps and sets with identity-based keys
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Insertion-ordered maps and sets keyed by SameValueZero.
//!
//! Keys never compare structurally. Primitives match by value (with `NaN`
//! matching `NaN` and `+0` matching `-0`); symbols and object-like values
//! match only when they are the same instance. Two separately built objects
//! with identical fields are different keys.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::value::Value;

/// Canonical bit pattern hashed for every `NaN`.
const NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// A value used as a map key or set member.
#[derive(Clone, Debug)]
pub(crate) struct Key(Value);

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_value_zero(&other.0)
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(&self.0).hash(state);
        match &self.0 {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => {
                let bits = if n.is_nan() {
                    NAN_BITS
                } else if *n == 0.0 {
                    0
                } else {
                    n.to_bits()
                };
                bits.hash(state);
            }
            Value::BigInt(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::Symbol(sym) => sym.hash(state),
            other => other.addr().hash(state),
        }
    }
}

// ============================================================================
// MapObject
// ============================================================================

/// An insertion-ordered map with identity-based keys.
#[derive(Clone, Debug, Default)]
pub struct MapObject {
    index: HashMap<Key, usize>,
    entries: Vec<(Value, Value)>,
}

impl MapObject {
    pub fn new() -> Self {
        MapObject::default()
    }

    /// Insert or overwrite an entry. An existing key keeps its position.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        if let Some(&slot) = self.index.get(&Key(key.clone())) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(Key(key.clone()), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        let slot = *self.index.get(&Key(key.clone()))?;
        self.entries.get(slot).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(&Key(key.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl FromIterator<(Value, Value)> for MapObject {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = MapObject::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// ============================================================================
// SetObject
// ============================================================================

/// An insertion-ordered set with identity-based membership.
#[derive(Clone, Debug, Default)]
pub struct SetObject {
    index: HashMap<Key, usize>,
    members: Vec<Value>,
}

impl SetObject {
    pub fn new() -> Self {
        SetObject::default()
    }

    /// Add a member. Returns false if it was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        let key = Key(value.clone());
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.members.len());
        self.members.push(value);
        true
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.index.contains_key(&Key(value.clone()))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.members.iter()
    }
}

impl FromIterator<Value> for SetObject {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = SetObject::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
