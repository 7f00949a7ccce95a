//! # Temporal Values: Millisecond Dates
//!
//! Defines [`Date`], a UTC instant with millisecond precision. Dates are
//! reference values: cloning a `Date` shares it, and strict identity
//! compares the shared allocation, while [`Date::same_instant`] compares the
//! epoch milliseconds used by literal equality.
//!
//! Rendering always uses ISO-8601 with exactly three fractional digits and a
//! `Z` suffix, e.g. `1970-01-01T00:00:00.001Z`.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::CoreError;

/// A UTC instant with millisecond precision.
#[derive(Debug, Clone)]
pub struct Date(Arc<DateTime<Utc>>);

impl Date {
    /// Create a date from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the instant is out of range.
    pub fn from_millis(millis: i64) -> Result<Self, CoreError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self::from_utc)
            .ok_or(CoreError::InvalidDate(millis))
    }

    /// Create a date from a `chrono::DateTime<Utc>`, truncating to milliseconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        let millis = dt.timestamp_millis();
        // Truncation cannot leave the range of the input instant.
        let truncated = DateTime::from_timestamp_millis(millis).unwrap_or(dt);
        Self(Arc::new(truncated))
    }

    /// Parse an RFC 3339 string with any offset, normalising to UTC.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateString` on malformed input.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| CoreError::InvalidDateString {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_utc(dt.with_timezone(&Utc)))
    }

    /// Current UTC time.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// ISO-8601 rendering with milliseconds and `Z` suffix.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// True if both dates denote the same millisecond.
    pub fn same_instant(&self, other: &Date) -> bool {
        self.timestamp_millis() == other.timestamp_millis()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Date) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
