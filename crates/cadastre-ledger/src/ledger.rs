//! # Land Ledger
//!
//! The composite-keyed store of land records plus the rules for
//! registration and availability toggling. The ledger exclusively owns all
//! [`Land`] records; the admin directory and owner index are collaborators
//! passed in by reference, so each operation's store dependencies are
//! visible in its signature.
//!
//! Both operations validate before they mutate. Once the first write
//! happens, nothing after it can fail, which is what makes each call an
//! all-or-nothing commit unit.

use std::collections::BTreeMap;

use cadastre_core::{AccountId, LandKey};

use crate::context::CallContext;
use crate::directory::AdminDirectory;
use crate::error::RegistryError;
use crate::owners::OwnerIndex;
use crate::parcel::{Land, LandSubmission};

/// Composite-keyed store of land records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandLedger {
    parcels: BTreeMap<LandKey, Land>,
}

impl LandLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new parcel.
    ///
    /// The caller must be a directory admin whose registered city equals
    /// the submission's city. State and district are not compared; city
    /// is the authorization scope of this design. The submission's
    /// composite key must be unused.
    ///
    /// On success the record is created with the caller as registering
    /// admin, the key is appended to the owner's index, and the key is
    /// returned. The record's `owner_index` is the position the key landed
    /// in.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownAdmin`] if the caller has no admin record.
    /// - [`RegistryError::CityMismatch`] if the admin's city differs from
    ///   the submission's.
    /// - [`RegistryError::DuplicateSurvey`] if the key is already taken.
    ///
    /// Any error leaves the ledger and the owner index untouched.
    pub fn register_land(
        &mut self,
        directory: &AdminDirectory,
        owners: &mut OwnerIndex,
        submission: LandSubmission,
        ctx: &CallContext,
    ) -> Result<LandKey, RegistryError> {
        let admin = directory
            .lookup(&ctx.caller)
            .ok_or_else(|| RegistryError::UnknownAdmin {
                caller: ctx.caller.clone(),
            })?;

        if admin.jurisdiction.city() != submission.jurisdiction.city() {
            return Err(RegistryError::CityMismatch {
                caller: ctx.caller.clone(),
                admin_city: admin.jurisdiction.city().to_string(),
                requested_city: submission.jurisdiction.city().to_string(),
            });
        }

        let key = submission.key();
        if self.parcels.contains_key(&key) {
            return Err(RegistryError::DuplicateSurvey { key });
        }

        // All checks passed; nothing below can fail.
        let owner_index = owners.holding_count(&submission.owner);
        let record = Land::new(&submission, ctx.caller.clone(), owner_index, ctx.at);
        self.parcels.insert(key.clone(), record);
        owners.append(submission.owner, key.clone());

        Ok(key)
    }

    /// Set the availability flag on the caller's holding at `position`.
    ///
    /// The record is addressed through the caller's own index namespace,
    /// which is the access control of this operation: the record's owner
    /// field is deliberately not compared against the caller, because a
    /// caller can only ever reach keys filed under their own identity.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NoSuchHolding`] if the caller has no holding at
    ///   that position.
    /// - [`RegistryError::AlreadyAvailable`] if the flag is already set.
    /// - [`RegistryError::Corrupted`] if the indexed key has no record,
    ///   which a consistently-mutated ledger never produces.
    pub fn mark_available(
        &mut self,
        owners: &OwnerIndex,
        position: u64,
        ctx: &CallContext,
    ) -> Result<(), RegistryError> {
        let key = owners
            .slot(&ctx.caller, position)
            .cloned()
            .ok_or_else(|| RegistryError::NoSuchHolding {
                owner: ctx.caller.clone(),
                position,
            })?;

        let record = self
            .parcels
            .get_mut(&key)
            .ok_or_else(|| RegistryError::Corrupted {
                detail: format!("owner index entry {key} has no ledger record"),
            })?;

        record.mark_available(&key, ctx.at)
    }

    /// The record stored under a key.
    pub fn get(&self, key: &LandKey) -> Option<&Land> {
        self.parcels.get(key)
    }

    /// Whether a record exists for the key.
    pub fn contains(&self, key: &LandKey) -> bool {
        self.parcels.contains_key(key)
    }

    /// Number of registered parcels.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// Whether the ledger holds no parcels.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Iterate (key, record) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&LandKey, &Land)> {
        self.parcels.iter()
    }

    /// Insert a record restored from a snapshot. Returns false if the key
    /// was already present.
    pub(crate) fn insert_restored(&mut self, key: LandKey, record: Land) -> bool {
        self.parcels.insert(key, record).is_none()
    }
}
