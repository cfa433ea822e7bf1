//! # Core Error Hierarchy
//!
//! Error types for the foundational crate. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Validation failures carry the offending value so callers can report it
//! without re-deriving context; canonicalization failures distinguish float
//! rejection from serializer faults.

use thiserror::Error;

/// Top-level error type for the cadastre core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A domain value failed construction-time validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Error constructing a validated domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Account identities must be non-empty after trimming.
    #[error("account identity must not be empty")]
    EmptyAccountId,

    /// Every jurisdiction field must be non-empty after trimming.
    #[error("jurisdiction {field} must not be empty")]
    EmptyJurisdictionField {
        /// The jurisdiction field that was empty ("state", "district", "city").
        field: &'static str,
    },

    /// Timestamps must carry the `Z` suffix.
    #[error("timestamp must use Z suffix (UTC only), got: {0:?}")]
    NonUtcTimestamp(String),

    /// Timestamp string did not parse as RFC 3339.
    #[error("invalid RFC 3339 timestamp {value:?}: {detail}")]
    MalformedTimestamp {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        detail: String,
    },

    /// Epoch seconds outside the representable datetime range.
    #[error("invalid Unix timestamp: {0}")]
    EpochOutOfRange(i64),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Monetary and area quantities must be integers.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
