//! # UTC-Only Timestamps
//!
//! Defines `Timestamp`, the UTC-only timestamp used on every registry
//! record, enforcing ISO 8601 with Z suffix truncated to seconds.
//!
//! ## Invariant
//!
//! Registry snapshots are content-addressed, so the same instant must
//! always produce the same canonical bytes. Local timezone offsets would
//! break that, which is why non-UTC inputs are rejected at construction
//! rather than silently converted. Deserialization goes through
//! [`Timestamp::parse`], so persisted state cannot smuggle in offsets or
//! sub-second precision either.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`]: from an ISO 8601 string, rejecting non-UTC offsets.
/// - [`Timestamp::from_epoch_secs()`]: from Unix epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Wrap a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO 8601 string.
    ///
    /// Only the `Z` suffix is accepted. Explicit offsets like `+05:30` are
    /// rejected, even `+00:00` which is semantically equivalent to `Z`,
    /// so that one instant has exactly one canonical representation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonUtcTimestamp`] for a missing `Z`
    /// suffix, or [`ValidationError::MalformedTimestamp`] if the string is
    /// not valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !s.ends_with('Z') {
            return Err(ValidationError::NonUtcTimestamp(s.to_string()));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ValidationError::MalformedTimestamp {
                value: s.to_string(),
                detail: e.to_string(),
            }
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from Unix epoch seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, ValidationError> {
        let dt =
            DateTime::from_timestamp(secs, 0).ok_or(ValidationError::EpochOutOfRange(secs))?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-03-01T10:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
