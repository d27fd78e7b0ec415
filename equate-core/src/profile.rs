// equate-core - Comparator profiles
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparator configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseProfileError;

/// Which value kinds the comparator understands natively.
///
/// `Extended` adds maps, sets and typed arrays on top of `Base` without
/// changing how anything `Base` already handles compares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Primitives, arrays, objects, dates, regular expressions, functions
    /// and coercion overrides. Maps, sets and typed arrays compare as plain
    /// objects by their own enumerable properties.
    #[default]
    Base,
    /// Everything in `Base` plus maps, sets and typed arrays.
    Extended,
}

impl Profile {
    pub fn is_extended(self) -> bool {
        matches!(self, Profile::Extended)
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Base => "base",
            Profile::Extended => "extended",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Profile::Base),
            "extended" | "es6" => Ok(Profile::Extended),
            _ => Err(ParseProfileError(s.to_string())),
        }
    }
}
