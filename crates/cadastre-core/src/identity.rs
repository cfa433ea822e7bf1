//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers that cross the registry boundary.
//! Each identifier is a distinct type: you cannot pass a `PropertyId`
//! where a `SurveyNumber` is expected, and an owner identity cannot be
//! confused with a free-form label.
//!
//! ## Validation
//!
//! [`AccountId`] validates at construction time and deserializes through
//! its constructor, so an empty identity cannot enter the system through a
//! snapshot. The integer identifiers ([`PropertyId`], [`SurveyNumber`]) are
//! always valid by construction; the registry does not interpret them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Implements `Deserialize` for string newtypes that must validate their
/// contents. Deserializes as a plain `String`, then routes through the
/// type's `new()` constructor so invalid values are rejected at the serde
/// boundary rather than silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// An authenticated account identity: an admin, a land owner, or a caller.
///
/// The registry never authenticates. Identities arrive already
/// authenticated from the embedding environment, so the only structural
/// requirement is that an identity is a non-empty string. Surrounding
/// whitespace is trimmed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AccountId(String);

impl_validating_deserialize!(AccountId);

impl AccountId {
    /// Create an account identity, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAccountId`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAccountId);
        }
        Ok(Self(trimmed))
    }

    /// Access the identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied property identifier.
///
/// Carried on the land record verbatim; the registry does not check it
/// for uniqueness. Parcel uniqueness hangs on the survey number composite.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PropertyId(pub u64);

impl PropertyId {
    /// Access the inner value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cadastral survey number, unique within a (state, district, city) scope.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SurveyNumber(pub u64);

impl SurveyNumber {
    /// Access the inner value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SurveyNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
