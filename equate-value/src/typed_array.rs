// equate-value - Typed arrays
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Fixed-width numeric buffers tagged with their element kind.

use std::fmt;

use num_bigint::BigInt;

use crate::value::Value;

/// Element type of a typed array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl ElementKind {
    /// Constructor name, e.g. `Uint8Array`.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Int8 => "Int8Array",
            ElementKind::Uint8 => "Uint8Array",
            ElementKind::Uint8Clamped => "Uint8ClampedArray",
            ElementKind::Int16 => "Int16Array",
            ElementKind::Uint16 => "Uint16Array",
            ElementKind::Int32 => "Int32Array",
            ElementKind::Uint32 => "Uint32Array",
            ElementKind::Float32 => "Float32Array",
            ElementKind::Float64 => "Float64Array",
            ElementKind::BigInt64 => "BigInt64Array",
            ElementKind::BigUint64 => "BigUint64Array",
        }
    }

    pub fn bytes_per_element(&self) -> usize {
        match self {
            ElementKind::Int8 | ElementKind::Uint8 | ElementKind::Uint8Clamped => 1,
            ElementKind::Int16 | ElementKind::Uint16 => 2,
            ElementKind::Int32 | ElementKind::Uint32 | ElementKind::Float32 => 4,
            ElementKind::Float64 | ElementKind::BigInt64 | ElementKind::BigUint64 => 8,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A homogeneous numeric buffer.
#[derive(Clone, Debug)]
pub enum TypedArray {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8Clamped(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    BigInt64(Vec<i64>),
    BigUint64(Vec<u64>),
}

/// Convert a number to a clamped byte: NaN becomes 0, ties round to even.
fn clamp_to_u8(n: f64) -> u8 {
    if n.is_nan() {
        return 0;
    }
    n.clamp(0.0, 255.0).round_ties_even() as u8
}

impl TypedArray {
    /// Build a `Uint8ClampedArray` from arbitrary numbers.
    pub fn uint8_clamped(values: &[f64]) -> Self {
        TypedArray::Uint8Clamped(values.iter().copied().map(clamp_to_u8).collect())
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            TypedArray::Int8(_) => ElementKind::Int8,
            TypedArray::Uint8(_) => ElementKind::Uint8,
            TypedArray::Uint8Clamped(_) => ElementKind::Uint8Clamped,
            TypedArray::Int16(_) => ElementKind::Int16,
            TypedArray::Uint16(_) => ElementKind::Uint16,
            TypedArray::Int32(_) => ElementKind::Int32,
            TypedArray::Uint32(_) => ElementKind::Uint32,
            TypedArray::Float32(_) => ElementKind::Float32,
            TypedArray::Float64(_) => ElementKind::Float64,
            TypedArray::BigInt64(_) => ElementKind::BigInt64,
            TypedArray::BigUint64(_) => ElementKind::BigUint64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            TypedArray::Int8(v) => v.len(),
            TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => v.len(),
            TypedArray::Int16(v) => v.len(),
            TypedArray::Uint16(v) => v.len(),
            TypedArray::Int32(v) => v.len(),
            TypedArray::Uint32(v) => v.len(),
            TypedArray::Float32(v) => v.len(),
            TypedArray::Float64(v) => v.len(),
            TypedArray::BigInt64(v) => v.len(),
            TypedArray::BigUint64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn byte_length(&self) -> usize {
        self.len() * self.kind().bytes_per_element()
    }

    /// Element at `index` as a value: a number, or a big integer for the
    /// 64-bit integer kinds.
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            TypedArray::Int8(v) => v.get(index).map(|&n| Value::Number(n.into())),
            TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => {
                v.get(index).map(|&n| Value::Number(n.into()))
            }
            TypedArray::Int16(v) => v.get(index).map(|&n| Value::Number(n.into())),
            TypedArray::Uint16(v) => v.get(index).map(|&n| Value::Number(n.into())),
            TypedArray::Int32(v) => v.get(index).map(|&n| Value::Number(n.into())),
            TypedArray::Uint32(v) => v.get(index).map(|&n| Value::Number(n.into())),
            TypedArray::Float32(v) => v.get(index).map(|&n| Value::Number(n.into())),
            TypedArray::Float64(v) => v.get(index).map(|&n| Value::Number(n)),
            TypedArray::BigInt64(v) => v.get(index).map(|&n| Value::bigint(BigInt::from(n))),
            TypedArray::BigUint64(v) => v.get(index).map(|&n| Value::bigint(BigInt::from(n))),
        }
    }

    /// Strict element-wise comparison.
    ///
    /// Kinds and lengths must match. Floating-point elements follow IEEE
    /// equality: `NaN` never matches and `+0` matches `-0`.
    pub fn elements_equal(&self, other: &TypedArray) -> bool {
        match (self, other) {
            (TypedArray::Int8(a), TypedArray::Int8(b)) => a == b,
            (TypedArray::Uint8(a), TypedArray::Uint8(b)) => a == b,
            (TypedArray::Uint8Clamped(a), TypedArray::Uint8Clamped(b)) => a == b,
            (TypedArray::Int16(a), TypedArray::Int16(b)) => a == b,
            (TypedArray::Uint16(a), TypedArray::Uint16(b)) => a == b,
            (TypedArray::Int32(a), TypedArray::Int32(b)) => a == b,
            (TypedArray::Uint32(a), TypedArray::Uint32(b)) => a == b,
            (TypedArray::Float32(a), TypedArray::Float32(b)) => a == b,
            (TypedArray::Float64(a), TypedArray::Float64(b)) => a == b,
            (TypedArray::BigInt64(a), TypedArray::BigInt64(b)) => a == b,
            (TypedArray::BigUint64(a), TypedArray::BigUint64(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_vec {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$elem>> for TypedArray {
                fn from(elements: Vec<$elem>) -> Self {
                    TypedArray::$variant(elements)
                }
            }
        )*
    };
}

impl_from_vec! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
    i64 => BigInt64,
    u64 => BigUint64,
}
