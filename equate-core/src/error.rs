// equate-core - Error types for the comparator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for comparison.
//!
//! Comparison itself only fails when a coercion hook fails; that error is the
//! value crate's [`Error`] and is returned exactly as the hook produced it.

pub use equate_value::{Error, Result};

/// Unrecognized profile name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comparison profile '{0}' (expected 'base' or 'extended')")]
pub struct ParseProfileError(pub String);
