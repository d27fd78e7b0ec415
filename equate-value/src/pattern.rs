// equate-value - Regular expression values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Regular expressions: a source pattern plus a flag string.
//!
//! A pattern is identified by its source text and flag string alone. The
//! source is compiled with the `regex` crate on first use; sources that crate
//! cannot express (backreferences, look-around) still make a valid pattern
//! and only fail when matched. Flags follow the usual letters:
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `d` | record match indices |
//! | `g` | global |
//! | `i` | case-insensitive |
//! | `m` | `^`/`$` match at line boundaries |
//! | `s` | `.` matches newlines |
//! | `u` | unicode |
//! | `v` | unicode sets |
//! | `y` | sticky |
//!
//! Only `i`, `m` and `s` change how the pattern compiles; the rest are kept
//! for identity. The stored flag string is normalized to the order above,
//! so `"ig"` and `"gi"` produce the same pattern.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Accepted flags in canonical order.
const FLAG_ORDER: &str = "dgimsuvy";

/// Source reported for an empty pattern.
const EMPTY_SOURCE: &str = "(?:)";

/// A regular expression: source text, flags and a lazily compiled matcher.
#[derive(Clone)]
pub struct Pattern {
    source: Rc<str>,
    flags: Rc<str>,
    compiled: OnceCell<std::result::Result<Regex, regex::Error>>,
}

/// Validate a flag string and return it in canonical order.
fn normalize_flags(flags: &str) -> Result<String> {
    let mut seen = [false; FLAG_ORDER.len()];
    for flag in flags.chars() {
        let slot = FLAG_ORDER
            .find(flag)
            .ok_or(Error::InvalidFlag { flag })?;
        if seen[slot] {
            return Err(Error::DuplicateFlag { flag });
        }
        seen[slot] = true;
    }
    let has = |flag: char| FLAG_ORDER.find(flag).is_some_and(|slot| seen[slot]);
    if has('u') && has('v') {
        return Err(Error::ConflictingFlags);
    }
    Ok(FLAG_ORDER
        .chars()
        .zip(seen)
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect())
}

impl Pattern {
    /// Create a pattern with the given flags.
    ///
    /// Only the flags are validated here; the source is compiled on first
    /// use by [`Pattern::regex`].
    pub fn new(source: &str, flags: &str) -> Result<Self> {
        let flags = normalize_flags(flags)?;
        let source = if source.is_empty() { EMPTY_SOURCE } else { source };
        Ok(Pattern {
            source: Rc::from(source),
            flags: Rc::from(flags),
            compiled: OnceCell::new(),
        })
    }

    /// The pattern text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The normalized flag string.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Test the pattern against `text`.
    pub fn is_match(&self, text: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(text))
    }

    /// The compiled expression, built on first call.
    ///
    /// Fails with [`Error::InvalidPattern`] when the source uses syntax the
    /// `regex` crate does not support.
    pub fn regex(&self) -> Result<&Regex> {
        self.compiled
            .get_or_init(|| {
                RegexBuilder::new(&self.source)
                    .case_insensitive(self.has_flag('i'))
                    .multi_line(self.has_flag('m'))
                    .dot_matches_new_line(self.has_flag('s'))
                    .build()
            })
            .as_ref()
            .map_err(|err| Error::InvalidPattern(err.clone()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_and_flags() {
        let p = Pattern::new("ab+", "gi").unwrap();
        assert_eq!(p.source(), "ab+");
        assert_eq!(p.flags(), "gi");
        assert!(p.has_flag('g'));
        assert!(!p.has_flag('m'));
        assert_eq!(format!("{}", p), "/ab+/gi");
    }

    #[test]
    fn test_flags_normalized() {
        let p = Pattern::new("x", "yigm").unwrap();
        assert_eq!(p.flags(), "gimy");
    }

    #[test]
    fn test_invalid_flags() {
        assert!(matches!(
            Pattern::new("x", "q"),
            Err(Error::InvalidFlag { flag: 'q' })
        ));
        assert!(matches!(
            Pattern::new("x", "gg"),
            Err(Error::DuplicateFlag { flag: 'g' })
        ));
        assert!(matches!(
            Pattern::new("x", "uv"),
            Err(Error::ConflictingFlags)
        ));
    }

    #[test]
    fn test_invalid_source_fails_on_use() {
        let p = Pattern::new("(unclosed", "").unwrap();
        assert_eq!(p.source(), "(unclosed");
        assert!(matches!(p.regex(), Err(Error::InvalidPattern(_))));
        assert!(p.is_match("x").is_err());
    }

    #[test]
    fn test_unsupported_syntax_is_still_a_pattern() {
        let backref = Pattern::new("(a)\\1", "g").unwrap();
        assert_eq!(format!("{}", backref), "/(a)\\1/g");
        assert!(Pattern::new("foo(?=bar)", "g").is_ok());
        assert!(Pattern::new("(?<!x)y", "").is_ok());
        assert!(matches!(backref.is_match("aa"), Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn test_empty_source() {
        let p = Pattern::new("", "").unwrap();
        assert_eq!(p.source(), "(?:)");
        assert!(p.is_match("anything").unwrap());
    }

    #[test]
    fn test_case_insensitive_match() {
        let p = Pattern::new("hello", "i").unwrap();
        assert!(p.is_match("HeLLo world").unwrap());
        let strict = Pattern::new("hello", "").unwrap();
        assert!(!strict.is_match("HELLO").unwrap());
    }

    #[test]
    fn test_dot_all() {
        assert!(Pattern::new("a.b", "s").unwrap().is_match("a\nb").unwrap());
        assert!(!Pattern::new("a.b", "").unwrap().is_match("a\nb").unwrap());
    }
}
