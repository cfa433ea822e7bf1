//! Read-only projections over the ledger and owner index.
//!
//! [`QueryService`] borrows the stores for the duration of a lookup and
//! can never mutate them. External consumers get plain data transfer
//! structs rather than references into store internals, except for
//! holdings enumeration which hands out the owner's key slice directly.

use cadastre_core::{AccountId, LandKey, PropertyId};

use crate::error::RegistryError;
use crate::ledger::LandLedger;
use crate::owners::OwnerIndex;

/// Snapshot of one land record's publicly queryable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandDetails {
    pub owner: AccountId,
    pub property_id: PropertyId,
    pub owner_index: u64,
    pub market_value: u64,
    pub square_footage: u64,
}

/// Request-queue counter paired with the caller-supplied property id.
///
/// `request_count` is reserved for a future request workflow and is 0 for
/// every record this ledger can currently produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSummary {
    pub request_count: u64,
    pub property_id: PropertyId,
}

/// Borrowed, read-only view over [`LandLedger`] + [`OwnerIndex`].
#[derive(Debug, Clone, Copy)]
pub struct QueryService<'a> {
    ledger: &'a LandLedger,
    owners: &'a OwnerIndex,
}

impl<'a> QueryService<'a> {
    pub fn new(ledger: &'a LandLedger, owners: &'a OwnerIndex) -> Self {
        Self { ledger, owners }
    }

    /// Details of the record stored under `key`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownParcel`] if no record exists for the key.
    pub fn land_details(&self, key: &LandKey) -> Result<LandDetails, RegistryError> {
        let record = self
            .ledger
            .get(key)
            .ok_or_else(|| RegistryError::UnknownParcel { key: key.clone() })?;
        Ok(LandDetails {
            owner: record.owner.clone(),
            property_id: record.property_id,
            owner_index: record.owner_index,
            market_value: record.market_value,
            square_footage: record.square_footage,
        })
    }

    /// Request counter and property id of the record stored under `key`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownParcel`] if no record exists for the key.
    pub fn request_summary(&self, key: &LandKey) -> Result<RequestSummary, RegistryError> {
        let record = self
            .ledger
            .get(key)
            .ok_or_else(|| RegistryError::UnknownParcel { key: key.clone() })?;
        Ok(RequestSummary {
            request_count: record.request_count,
            property_id: record.property_id,
        })
    }

    /// The caller's holding at `position` in their own index namespace.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NoSuchHolding`] if the caller has no holding at
    /// that position.
    pub fn owner_slot(&self, caller: &AccountId, position: u64) -> Result<LandKey, RegistryError> {
        self.owners
            .slot(caller, position)
            .cloned()
            .ok_or_else(|| RegistryError::NoSuchHolding {
                owner: caller.clone(),
                position,
            })
    }

    /// Every key the owner holds, in registration order. Empty for owners
    /// with no records.
    pub fn holdings(&self, owner: &AccountId) -> &'a [LandKey] {
        self.owners.holdings(owner)
    }

    /// Number of records the owner holds.
    pub fn holding_count(&self, owner: &AccountId) -> u64 {
        self.owners.holding_count(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CallContext;
    use crate::directory::AdminDirectory;
    use crate::error::ErrorKind;
    use crate::parcel::LandSubmission;
    use cadastre_core::{Jurisdiction, SurveyNumber, Timestamp};

    fn account(s: &str) -> AccountId {
        AccountId::new(s).unwrap()
    }

    /// One admin, two registered parcels for owner-y.
    fn populated() -> (LandLedger, OwnerIndex) {
        let meja = Jurisdiction::new("UP", "Allahabad", "Meja").unwrap();
        let mut directory = AdminDirectory::new();
        directory.add_admin(
            account("registrar-x"),
            meja.clone(),
            Timestamp::parse("2026-02-01T00:00:00Z").unwrap(),
        );

        let mut ledger = LandLedger::new();
        let mut owners = OwnerIndex::new();
        let ctx = CallContext::new(
            account("registrar-x"),
            Timestamp::parse("2026-03-01T10:00:00Z").unwrap(),
        );
        for (survey, property) in [(123u64, 7u64), (456, 8)] {
            ledger
                .register_land(
                    &directory,
                    &mut owners,
                    LandSubmission {
                        jurisdiction: meja.clone(),
                        property_id: PropertyId(property),
                        survey_number: SurveyNumber(survey),
                        owner: account("owner-y"),
                        market_value: 100_000,
                        square_footage: 1_000,
                    },
                    &ctx,
                )
                .unwrap();
        }
        (ledger, owners)
    }

    #[test]
    fn land_details_returns_all_fields() {
        let (ledger, owners) = populated();
        let queries = QueryService::new(&ledger, &owners);
        let key = LandKey::new(
            Jurisdiction::new("UP", "Allahabad", "Meja").unwrap(),
            SurveyNumber(123),
        );

        let details = queries.land_details(&key).unwrap();
        assert_eq!(details.owner, account("owner-y"));
        assert_eq!(details.property_id, PropertyId(7));
        assert_eq!(details.owner_index, 0);
        assert_eq!(details.market_value, 100_000);
        assert_eq!(details.square_footage, 1_000);
    }

    #[test]
    fn land_details_unknown_key_is_not_found() {
        let (ledger, owners) = populated();
        let queries = QueryService::new(&ledger, &owners);
        let key = LandKey::new(
            Jurisdiction::new("UP", "Allahabad", "Meja").unwrap(),
            SurveyNumber(999),
        );

        let err = queries.land_details(&key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(matches!(err, RegistryError::UnknownParcel { .. }));
    }

    #[test]
    fn request_summary_count_is_zero() {
        let (ledger, owners) = populated();
        let queries = QueryService::new(&ledger, &owners);
        let key = LandKey::new(
            Jurisdiction::new("UP", "Allahabad", "Meja").unwrap(),
            SurveyNumber(456),
        );

        let summary = queries.request_summary(&key).unwrap();
        assert_eq!(summary.request_count, 0);
        assert_eq!(summary.property_id, PropertyId(8));
    }

    #[test]
    fn request_summary_unknown_key_is_not_found() {
        let (ledger, owners) = populated();
        let queries = QueryService::new(&ledger, &owners);
        let key = LandKey::new(
            Jurisdiction::new("MP", "Bhopal", "Meja").unwrap(),
            SurveyNumber(123),
        );

        let err = queries.request_summary(&key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn owner_slot_resolves_in_registration_order() {
        let (ledger, owners) = populated();
        let queries = QueryService::new(&ledger, &owners);

        let first = queries.owner_slot(&account("owner-y"), 0).unwrap();
        let second = queries.owner_slot(&account("owner-y"), 1).unwrap();
        assert_eq!(first.survey_number, SurveyNumber(123));
        assert_eq!(second.survey_number, SurveyNumber(456));
    }

    #[test]
    fn owner_slot_out_of_range_is_not_found() {
        let (ledger, owners) = populated();
        let queries = QueryService::new(&ledger, &owners);

        let err = queries.owner_slot(&account("owner-y"), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = queries.owner_slot(&account("nobody"), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn holdings_enumerates_keys_and_count_matches() {
        let (ledger, owners) = populated();
        let queries = QueryService::new(&ledger, &owners);

        let keys = queries.holdings(&account("owner-y"));
        assert_eq!(keys.len(), 2);
        assert_eq!(queries.holding_count(&account("owner-y")), 2);
        assert!(queries.holdings(&account("nobody")).is_empty());
        assert_eq!(queries.holding_count(&account("nobody")), 0);
    }
}
