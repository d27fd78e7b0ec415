// equate-value - Conversions from Rust types
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversions from Rust types into [`Value`].
//!
//! | Rust Type | Value |
//! |-----------|-------|
//! | `()` | `undefined` |
//! | `bool` | boolean |
//! | `i8`..`i32`, `u8`..`u32`, `f32`, `f64` | number |
//! | `i64`, `u64`, `BigInt` | bigint |
//! | `String`, `&str` | string |
//! | `Vec<T>` | array |
//! | `Option<T>` | `T` or `null` |
//! | `Symbol`, `Function`, `Object`, `Date`, `Pattern`, `TypedArray` | the matching variant |
//!
//! 64-bit integers become big integers rather than numbers because a
//! double cannot hold every `i64` exactly.

use std::rc::Rc;

use num_bigint::BigInt;

use crate::collections::{MapObject, SetObject};
use crate::date::Date;
use crate::function::Function;
use crate::object::Object;
use crate::pattern::Pattern;
use crate::symbol::Symbol;
use crate::typed_array::TypedArray;
use crate::value::Value;

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(f64::from(n))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::bigint(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::bigint(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(Rc::new(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::from_object(object)
    }
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        Value::date(date)
    }
}

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        Value::RegExp(Rc::new(pattern))
    }
}

impl From<TypedArray> for Value {
    fn from(buffer: TypedArray) -> Self {
        Value::TypedArray(Rc::new(buffer))
    }
}

impl From<MapObject> for Value {
    fn from(map: MapObject) -> Self {
        Value::Map(Rc::new(map))
    }
}

impl From<SetObject> for Value {
    fn from(set: SetObject) -> Self {
        Value::Set(Rc::new(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert!(matches!(Value::from(()), Value::Undefined));
        assert!(matches!(Value::from(true), Value::Bool(true)));
        assert!(Value::from(3i32).strict_equals(&Value::number(3.0)));
        assert!(Value::from(1.5f32).strict_equals(&Value::number(1.5)));
        assert!(Value::from(9i64).strict_equals(&Value::bigint(9)));
        assert!(Value::from("hi").strict_equals(&Value::from(String::from("hi"))));
    }

    #[test]
    fn test_option() {
        assert!(matches!(Value::from(None::<i32>), Value::Null));
        assert!(Value::from(Some(2u8)).strict_equals(&Value::number(2.0)));
    }

    #[test]
    fn test_vec() {
        let value = Value::from(vec![1i32, 2, 3]);
        match value {
            Value::Array(items) => assert_eq!(items.len(), 3),
            other => panic!("expected array, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_containers() {
        assert_eq!(Value::from(MapObject::new()).type_name(), "map");
        assert_eq!(Value::from(SetObject::new()).type_name(), "set");
        assert_eq!(Value::from(Object::new()).type_name(), "object");
        assert_eq!(Value::from(Date::from_millis(0.0)).type_name(), "date");
    }
}
