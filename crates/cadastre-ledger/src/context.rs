//! # Call Context
//!
//! The registry never authenticates and never reads a clock. Both facts
//! arrive from the embedding environment in a [`CallContext`]: who is
//! calling, and when. Library tests pass fixed timestamps; the CLI passes
//! `Timestamp::now()`.

use cadastre_core::{AccountId, Timestamp};

/// The authenticated caller identity and wall-clock instant supplied by
/// the execution environment for one registry call.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// The already-authenticated calling identity.
    pub caller: AccountId,
    /// The instant the call is applied at.
    pub at: Timestamp,
}

impl CallContext {
    /// Bundle a caller identity with a call instant.
    pub fn new(caller: AccountId, at: Timestamp) -> Self {
        Self { caller, at }
    }
}
