//! # Land Records
//!
//! The [`Land`] record is what the ledger stores under each key: ownership,
//! the registering authority, the caller-supplied figures, and the
//! availability flag. Records are created exactly once by a successful
//! registration, mutated only by the one-way availability transition, and
//! never deleted.

use serde::{Deserialize, Serialize};

use cadastre_core::{AccountId, Jurisdiction, LandKey, PropertyId, SurveyNumber, Timestamp};

use crate::error::RegistryError;

/// The call arguments for a land registration, minus the caller (which
/// arrives in the call context).
#[derive(Debug, Clone)]
pub struct LandSubmission {
    /// Where the parcel lies.
    pub jurisdiction: Jurisdiction,
    /// Caller-supplied property identifier; not checked for uniqueness.
    pub property_id: PropertyId,
    /// Survey number; unique within the jurisdiction.
    pub survey_number: SurveyNumber,
    /// The identity that will own the record.
    pub owner: AccountId,
    /// Declared market value.
    pub market_value: u64,
    /// Parcel area in square feet.
    pub square_footage: u64,
}

impl LandSubmission {
    /// The ledger key this submission would occupy.
    pub fn key(&self) -> LandKey {
        LandKey::new(self.jurisdiction.clone(), self.survey_number)
    }
}

/// A registered land record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Land {
    /// The identity that owns this parcel.
    pub owner: AccountId,
    /// The admin that registered it.
    pub registered_by: AccountId,
    /// Caller-supplied property identifier, carried verbatim.
    pub property_id: PropertyId,
    /// Survey number, also part of the ledger key.
    pub survey_number: SurveyNumber,
    /// True from creation onward; never reset.
    pub registered: bool,
    /// Declared market value.
    pub market_value: u64,
    /// Parcel area in square feet.
    pub square_footage: u64,
    /// Whether the owner has flagged the parcel as available for
    /// transfer. Starts false; the transition to true is one-way.
    pub available: bool,
    /// Position of this record within its owner's holdings, fixed at
    /// creation.
    pub owner_index: u64,
    /// Reserved for a future request queue; always 0 in this scope.
    pub request_count: u64,
    /// When the record was created.
    pub registered_at: Timestamp,
    /// When the availability flag was set, if it has been.
    pub available_since: Option<Timestamp>,
}

impl Land {
    /// Create the record for a successful registration.
    pub fn new(
        submission: &LandSubmission,
        registered_by: AccountId,
        owner_index: u64,
        registered_at: Timestamp,
    ) -> Self {
        Self {
            owner: submission.owner.clone(),
            registered_by,
            property_id: submission.property_id,
            survey_number: submission.survey_number,
            registered: true,
            market_value: submission.market_value,
            square_footage: submission.square_footage,
            available: false,
            owner_index,
            request_count: 0,
            registered_at,
            available_since: None,
        }
    }

    /// Set the availability flag (false → true, one-way).
    ///
    /// The key is only used for error reporting; the record itself does
    /// not carry its full jurisdiction.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyAvailable`] if the flag is already
    /// set. There is no operation that clears it again.
    pub fn mark_available(&mut self, key: &LandKey, at: Timestamp) -> Result<(), RegistryError> {
        if self.available {
            return Err(RegistryError::AlreadyAvailable { key: key.clone() });
        }
        self.available = true;
        self.available_since = Some(at);
        Ok(())
    }
}
