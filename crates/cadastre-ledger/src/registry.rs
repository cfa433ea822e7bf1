//! The registry facade.
//!
//! [`Registry`] owns the three stores and is the single object an embedder
//! passes around by reference. Mutating operations take `&mut self`, so
//! the serial, all-or-nothing execution contract is enforced by the borrow
//! checker within a process; reads go through [`Registry::queries`].

use cadastre_core::{AccountId, Jurisdiction, LandKey, Timestamp};

use crate::context::CallContext;
use crate::directory::{Admin, AdminDirectory};
use crate::error::RegistryError;
use crate::ledger::LandLedger;
use crate::owners::OwnerIndex;
use crate::parcel::LandSubmission;
use crate::query::QueryService;
use crate::snapshot::RegistrySnapshot;

/// One admin directory, one land ledger, one owner index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    directory: AdminDirectory,
    ledger: LandLedger,
    owners: OwnerIndex,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite the admin record for `identity`.
    ///
    /// Unconditional upsert with no authorization check; an approval
    /// workflow is out of scope for now.
    pub fn add_admin(&mut self, identity: AccountId, jurisdiction: Jurisdiction, at: Timestamp) {
        self.directory.add_admin(identity, jurisdiction, at);
    }

    /// Register a new parcel. See [`LandLedger::register_land`].
    pub fn register_land(
        &mut self,
        submission: LandSubmission,
        ctx: &CallContext,
    ) -> Result<LandKey, RegistryError> {
        self.ledger
            .register_land(&self.directory, &mut self.owners, submission, ctx)
    }

    /// Flag the caller's holding at `position` as available. See
    /// [`LandLedger::mark_available`].
    pub fn mark_available(&mut self, position: u64, ctx: &CallContext) -> Result<(), RegistryError> {
        self.ledger.mark_available(&self.owners, position, ctx)
    }

    /// Read-only query view over the ledger and owner index.
    pub fn queries(&self) -> QueryService<'_> {
        QueryService::new(&self.ledger, &self.owners)
    }

    /// The admin record for `identity`, if one exists.
    pub fn admin(&self, identity: &AccountId) -> Option<&Admin> {
        self.directory.lookup(identity)
    }

    pub fn directory(&self) -> &AdminDirectory {
        &self.directory
    }

    pub fn ledger(&self) -> &LandLedger {
        &self.ledger
    }

    pub fn owners(&self) -> &OwnerIndex {
        &self.owners
    }

    /// Capture the full registry state as a versioned snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::capture(self)
    }

    /// Rebuild a registry from a snapshot, revalidating cross-store
    /// invariants. See [`RegistrySnapshot::restore`].
    pub fn restore(snapshot: &RegistrySnapshot) -> Result<Self, RegistryError> {
        snapshot.restore()
    }

    /// Assemble a registry from already-validated stores.
    pub(crate) fn from_parts(
        directory: AdminDirectory,
        ledger: LandLedger,
        owners: OwnerIndex,
    ) -> Self {
        Self {
            directory,
            ledger,
            owners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use cadastre_core::{PropertyId, SurveyNumber};

    fn account(s: &str) -> AccountId {
        AccountId::new(s).unwrap()
    }

    fn ctx(caller: &str) -> CallContext {
        CallContext::new(
            account(caller),
            Timestamp::parse("2026-03-01T10:00:00Z").unwrap(),
        )
    }

    fn meja_submission(survey: u64, owner: &str) -> LandSubmission {
        LandSubmission {
            jurisdiction: Jurisdiction::new("UP", "Allahabad", "Meja").unwrap(),
            property_id: PropertyId(7),
            survey_number: SurveyNumber(survey),
            owner: account(owner),
            market_value: 100_000,
            square_footage: 1_000,
        }
    }

    /// Admin X for Meja plus one parcel registered to owner Y.
    fn registry_with_survey_123() -> Registry {
        let mut registry = Registry::new();
        registry.add_admin(
            account("admin-x"),
            Jurisdiction::new("UP", "Allahabad", "Meja").unwrap(),
            Timestamp::parse("2026-02-01T00:00:00Z").unwrap(),
        );
        registry
            .register_land(meja_submission(123, "owner-y"), &ctx("admin-x"))
            .unwrap();
        registry
    }

    // ── Lifecycle scenarios ──────────────────────────────────────────────

    #[test]
    fn admin_registers_and_details_are_queryable() {
        let registry = registry_with_survey_123();
        let key = LandKey::new(
            Jurisdiction::new("UP", "Allahabad", "Meja").unwrap(),
            SurveyNumber(123),
        );

        let details = registry.queries().land_details(&key).unwrap();
        assert_eq!(details.owner, account("owner-y"));
        assert_eq!(details.property_id, PropertyId(7));
        assert_eq!(details.owner_index, 0);
        assert_eq!(details.market_value, 100_000);
        assert_eq!(details.square_footage, 1_000);
    }

    #[test]
    fn admin_of_other_city_cannot_register_here() {
        let mut registry = registry_with_survey_123();
        registry.add_admin(
            account("admin-z"),
            Jurisdiction::new("UP", "Allahabad", "Allahabad").unwrap(),
            Timestamp::parse("2026-02-02T00:00:00Z").unwrap(),
        );

        // admin-z administers Allahabad city; the submission targets Meja.
        let err = registry
            .register_land(meja_submission(999, "owner-y"), &ctx("admin-z"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn reregistering_same_key_is_conflict() {
        let mut registry = registry_with_survey_123();

        let err = registry
            .register_land(meja_submission(123, "owner-y"), &ctx("admin-x"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn owner_releases_once_then_conflict() {
        let mut registry = registry_with_survey_123();

        registry.mark_available(0, &ctx("owner-y")).unwrap();
        let err = registry.mark_available(0, &ctx("owner-y")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn re_adding_admin_overwrites_jurisdiction() {
        let mut registry = registry_with_survey_123();
        registry.add_admin(
            account("admin-x"),
            Jurisdiction::new("UP", "Allahabad", "Allahabad").unwrap(),
            Timestamp::parse("2026-02-03T00:00:00Z").unwrap(),
        );

        // Now the Meja registration that used to succeed is rejected.
        let err = registry
            .register_land(meja_submission(456, "owner-y"), &ctx("admin-x"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            registry.admin(&account("admin-x")).unwrap().jurisdiction.city(),
            "Allahabad"
        );
    }

    #[test]
    fn snapshot_roundtrip_preserves_registry() {
        let mut registry = registry_with_survey_123();
        registry.mark_available(0, &ctx("owner-y")).unwrap();

        let snapshot = registry.snapshot();
        let restored = Registry::restore(&snapshot).unwrap();
        assert_eq!(restored, registry);
    }
}
