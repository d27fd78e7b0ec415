// equate-value - Date values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Dates are a single time value in milliseconds since the Unix epoch.
//!
//! The time value is an integral `f64`. Inputs that are not finite or fall
//! outside ±8.64e15 ms (±100,000,000 days) produce an invalid date whose
//! time value is `NaN`.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use crate::error::Result;

/// Largest representable distance from the epoch, in milliseconds.
pub const MAX_TIME_MS: f64 = 8.64e15;

/// An instant in time.
#[derive(Clone, Copy)]
pub struct Date {
    time: f64,
}

/// Clamp an arbitrary number to a valid time value or `NaN`.
fn time_clip(time: f64) -> f64 {
    if !time.is_finite() || time.abs() > MAX_TIME_MS {
        return f64::NAN;
    }
    // `+ 0.0` folds -0 into +0
    time.trunc() + 0.0
}

impl Date {
    /// Create a date from milliseconds since the epoch.
    pub fn from_millis(millis: f64) -> Self {
        Date {
            time: time_clip(millis),
        }
    }

    /// Create a date from a chrono datetime in any timezone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Date::from_millis(datetime.timestamp_millis() as f64)
    }

    /// Parse an RFC 3339 timestamp such as `2023-01-01T00:00:00Z`.
    pub fn parse(text: &str) -> Result<Self> {
        let datetime = DateTime::parse_from_rfc3339(text)?;
        Ok(Date::from_datetime(&datetime))
    }

    /// Create an invalid date.
    pub fn invalid() -> Self {
        Date { time: f64::NAN }
    }

    /// Milliseconds since the epoch, or `NaN` for an invalid date.
    pub fn time_value(&self) -> f64 {
        self.time
    }

    pub fn is_valid(&self) -> bool {
        !self.time.is_nan()
    }

    /// Convert to a UTC datetime, if valid and within chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::from_timestamp_millis(self.time as i64)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(
                f,
                "{}",
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            None => write!(f, "Invalid Date"),
        }
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self)
    }
}
