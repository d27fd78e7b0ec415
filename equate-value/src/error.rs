// equate-value - Error types for value construction and coercion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types shared by the value model and the comparator.

use thiserror::Error;

use crate::value::Value;

/// Result type for value construction and coercion hooks.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building values or running coercion hooks.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Value raised by a user-supplied hook (coercion method or native fn).
    ///
    /// The comparator never catches this; it reaches the caller untouched.
    #[error("{0}")]
    Thrown(Value),

    /// Unknown regular expression flag
    #[error("invalid regular expression flag '{flag}'")]
    InvalidFlag { flag: char },

    /// Flag given more than once
    #[error("duplicate regular expression flag '{flag}'")]
    DuplicateFlag { flag: char },

    /// `u` and `v` are mutually exclusive
    #[error("regular expression flags 'u' and 'v' cannot be combined")]
    ConflictingFlags,

    /// Pattern source did not compile
    #[error("invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Date string could not be parsed
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Wrong value type for an operation
    #[error("{context}: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: &'static str,
    },
}

impl Error {
    /// Wrap an arbitrary value as a thrown error.
    pub fn thrown(value: impl Into<Value>) -> Self {
        Error::Thrown(value.into())
    }

    /// Create a type error for the named operation.
    pub fn type_error(context: &'static str, expected: &'static str, got: &Value) -> Self {
        Error::TypeError {
            expected,
            got: got.type_name(),
            context,
        }
    }
}
