// equate-core - Deep equality comparator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Structural equality.
//!
//! Rules are tried in a fixed order and the first that applies decides:
//!
//! 1. Same instance, or equal primitives: equal.
//! 2. Both `NaN`: equal.
//! 3. Either side is a primitive: not equal.
//! 4. Different kind tags (class, element kind, ...): not equal.
//! 5. Functions: not equal (identical ones were caught by rule 1).
//! 6. Arrays: same length, index-wise equal.
//! 7. Dates: same time value.
//! 8. Regular expressions: same source and flags.
//! 9. Typed arrays (extended): same elements by strict comparison.
//! 10. Maps (extended): same size, same keys by identity, equal values.
//! 11. Sets (extended): same size, same members by identity.
//! 12. Coercion overrides: compare what the hook returns for each side.
//! 13. Everything else: same own property names, equal property values.
//!
//! Inputs must be acyclic. A value graph that reaches itself recurses until
//! the stack is exhausted.

use equate_value::{Coercion, MapObject, Object, Result, SetObject, TypedArray, Value, Vector};
use tracing::{debug, trace};

use crate::classify::{OwnProperties, Shape};
use crate::profile::Profile;

/// A deep equality comparator.
///
/// Holds no state between calls; one instance can serve any number of
/// comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Comparator {
    profile: Profile,
}

impl Comparator {
    pub const fn new(profile: Profile) -> Self {
        Comparator { profile }
    }

    /// Comparator for the base profile.
    pub const fn base() -> Self {
        Comparator::new(Profile::Base)
    }

    /// Comparator that also understands maps, sets and typed arrays.
    pub const fn extended() -> Self {
        Comparator::new(Profile::Extended)
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Compare two values structurally.
    ///
    /// Fails only when a coercion hook fails, with the hook's own error.
    pub fn equal(&self, a: &Value, b: &Value) -> Result<bool> {
        if a.strict_equals(b) {
            return Ok(true);
        }
        if a.is_nan() && b.is_nan() {
            return Ok(true);
        }

        let (left, right) = (Shape::of(a), Shape::of(b));
        let (Some(left_tag), Some(right_tag)) = (left.kind_tag(), right.kind_tag()) else {
            return Ok(false);
        };
        if left_tag != right_tag {
            trace!(
                left = left.name(),
                right = right.name(),
                left_tag = ?left_tag,
                right_tag = ?right_tag,
                "kind tags differ"
            );
            return Ok(false);
        }

        self.equal_shapes(left, right)
    }

    /// Compare two object-like shapes that share a kind tag.
    fn equal_shapes(&self, left: Shape<'_>, right: Shape<'_>) -> Result<bool> {
        let extended = self.profile.is_extended();
        match left {
            Shape::Primitive(_) | Shape::FunctionRef(_) => Ok(false),
            Shape::Sequence(a) => {
                let Shape::Sequence(b) = right else {
                    return Ok(false);
                };
                self.equal_sequences(a, b)
            }
            Shape::DateInstant(a) => {
                let Shape::DateInstant(b) = right else {
                    return Ok(false);
                };
                Ok(a.time_value() == b.time_value())
            }
            Shape::Pattern(a) => {
                let Shape::Pattern(b) = right else {
                    return Ok(false);
                };
                Ok(a.source() == b.source() && a.flags() == b.flags())
            }
            Shape::FixedBuffer(a) if extended => {
                let Shape::FixedBuffer(b) = right else {
                    return Ok(false);
                };
                Ok(equal_buffers(a, b))
            }
            Shape::AssociativeMap(a) if extended => {
                let Shape::AssociativeMap(b) = right else {
                    return Ok(false);
                };
                self.equal_maps(a, b)
            }
            Shape::MembershipSet(a) if extended => {
                let Shape::MembershipSet(b) = right else {
                    return Ok(false);
                };
                Ok(equal_sets(a, b))
            }
            Shape::Coercible(a, coercion) => {
                let Shape::Coercible(b, _) = right else {
                    return Ok(false);
                };
                equal_coerced(a, b, coercion)
            }
            Shape::Record(_)
            | Shape::FixedBuffer(_)
            | Shape::AssociativeMap(_)
            | Shape::MembershipSet(_) => {
                match (left.own_properties(), right.own_properties()) {
                    (Some(a), Some(b)) => self.equal_properties(&a, &b),
                    _ => Ok(false),
                }
            }
        }
    }

    fn equal_sequences(&self, a: &Vector<Value>, b: &Vector<Value>) -> Result<bool> {
        if a.len() != b.len() {
            return Ok(false);
        }
        for (x, y) in a.iter().zip(b.iter()) {
            if !self.equal(x, y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn equal_maps(&self, a: &MapObject, b: &MapObject) -> Result<bool> {
        if a.len() != b.len() {
            return Ok(false);
        }
        if !a.iter().all(|(key, _)| b.contains_key(key)) {
            return Ok(false);
        }
        for (key, x) in a.iter() {
            let Some(y) = b.get(key) else {
                return Ok(false);
            };
            if !self.equal(x, y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn equal_properties(&self, a: &OwnProperties<'_>, b: &OwnProperties<'_>) -> Result<bool> {
        if a.len() != b.len() {
            return Ok(false);
        }
        let entries = a.entries();
        if !entries.iter().all(|(key, _)| b.contains_key(key)) {
            return Ok(false);
        }
        for (key, x) in &entries {
            let Some(y) = b.get(key) else {
                return Ok(false);
            };
            if !self.equal(x, &y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn equal_buffers(a: &TypedArray, b: &TypedArray) -> bool {
    a.kind() == b.kind() && a.len() == b.len() && a.elements_equal(b)
}

fn equal_sets(a: &SetObject, b: &SetObject) -> bool {
    a.len() == b.len() && a.iter().all(|member| b.contains(member))
}

/// Compare two instances of the same class through its coercion override.
///
/// The hook runs exactly once per side, left first.
fn equal_coerced(a: &Object, b: &Object, coercion: Coercion<'_>) -> Result<bool> {
    let class = a.class().map_or("Object", |class| class.name());
    match coercion {
        Coercion::ValueOf(hook) => {
            trace!(class, "comparing by value coercion");
            let left = hook(a).inspect_err(|err| debug!(class, %err, "value coercion failed"))?;
            let right = hook(b).inspect_err(|err| debug!(class, %err, "value coercion failed"))?;
            Ok(left.strict_equals(&right))
        }
        Coercion::ToText(hook) => {
            trace!(class, "comparing by text coercion");
            let left = hook(a).inspect_err(|err| debug!(class, %err, "text coercion failed"))?;
            let right = hook(b).inspect_err(|err| debug!(class, %err, "text coercion failed"))?;
            Ok(left == right)
        }
    }
}

/// Compare under the base profile.
pub fn equal(a: &Value, b: &Value) -> Result<bool> {
    Comparator::base().equal(a, b)
}

/// Compare under the extended profile.
pub fn equal_extended(a: &Value, b: &Value) -> Result<bool> {
    Comparator::extended().equal(a, b)
}
