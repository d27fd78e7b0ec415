// equate-value - Native function values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Function values wrap a named Rust closure.
//!
//! Functions have no structural content: two functions are the same only
//! when they are the same instance, regardless of what they compute.

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::value::Value;

/// Signature of a native function body.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value>;

/// A named native function.
#[derive(Clone)]
pub struct Function {
    inner: Rc<FunctionInner>,
}

struct FunctionInner {
    name: Rc<str>,
    func: Box<NativeFn>,
}

impl Function {
    /// Create a new function from a closure.
    pub fn new(name: &str, func: impl Fn(&[Value]) -> Result<Value> + 'static) -> Self {
        Function {
            inner: Rc::new(FunctionInner {
                name: Rc::from(name),
                func: Box::new(func),
            }),
        }
    }

    /// Get the function name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.inner.func)(args)
    }

    /// Check if both handles refer to the same function instance.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<fn {}>", self.name())
    }
}
