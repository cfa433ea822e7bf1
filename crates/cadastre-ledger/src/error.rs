//! # Registry Errors
//!
//! Every rejected ledger operation reports a [`RegistryError`] with the
//! offending identity, key, or position, and classifies as one of the
//! [`ErrorKind`] values callers dispatch on. A failure never leaves
//! partial writes behind; operations validate before they mutate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cadastre_core::{AccountId, LandKey};

/// Classification of a rejected registry operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller is not a recognized admin, or the admin's city does not
    /// match the target city.
    Unauthorized,
    /// Uniqueness or idempotence violation: survey number already used,
    /// availability already set.
    Conflict,
    /// Lookup by key or by index position found nothing.
    NotFound,
    /// Persisted state failed integrity revalidation. Never produced by
    /// the public operation surface, only by snapshot restore.
    Corrupted,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Conflict => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::Corrupted => "CORRUPTED",
        };
        f.write_str(s)
    }
}

/// Errors that can occur during registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Caller has no admin record in the directory.
    #[error("caller {caller} is not a registered admin")]
    UnknownAdmin {
        /// The unrecognized caller.
        caller: AccountId,
    },

    /// An admin may only register land in its own city.
    #[error(
        "admin {caller} may only register land in its own city: \
         admin city is {admin_city:?}, requested {requested_city:?}"
    )]
    CityMismatch {
        /// The calling admin.
        caller: AccountId,
        /// The city the admin is registered for.
        admin_city: String,
        /// The city named in the submission.
        requested_city: String,
    },

    /// A land record already exists for this key.
    #[error("survey number already registered: {key}")]
    DuplicateSurvey {
        /// The contested ledger key.
        key: LandKey,
    },

    /// The record's availability flag is already set.
    #[error("property already marked available: {key}")]
    AlreadyAvailable {
        /// The ledger key of the record.
        key: LandKey,
    },

    /// The owner has no holding at the given index position.
    #[error("owner {owner} has no holding at position {position}")]
    NoSuchHolding {
        /// The owner whose index namespace was probed.
        owner: AccountId,
        /// The out-of-range position.
        position: u64,
    },

    /// No land record exists for the given key.
    #[error("no land record for key {key}")]
    UnknownParcel {
        /// The absent ledger key.
        key: LandKey,
    },

    /// Cross-store invariants do not hold.
    #[error("ledger state is inconsistent: {detail}")]
    Corrupted {
        /// What failed revalidation.
        detail: String,
    },
}

impl RegistryError {
    /// The failure classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownAdmin { .. } | Self::CityMismatch { .. } => ErrorKind::Unauthorized,
            Self::DuplicateSurvey { .. } | Self::AlreadyAvailable { .. } => ErrorKind::Conflict,
            Self::NoSuchHolding { .. } | Self::UnknownParcel { .. } => ErrorKind::NotFound,
            Self::Corrupted { .. } => ErrorKind::Corrupted,
        }
    }
}
