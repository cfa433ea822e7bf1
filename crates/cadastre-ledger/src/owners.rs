//! # Owner Index
//!
//! Per-owner ordered list of the ledger keys an identity holds. The index
//! holds keys, not records (a non-owning reference back into the ledger),
//! and grows by exactly one entry per successful registration naming that
//! owner.
//!
//! The position of a key within an owner's list is the record's address
//! for per-owner operations: `mark_available` and `owner_slot` resolve
//! through the caller's own list, which is what scopes those operations to
//! the caller's holdings.

use std::collections::BTreeMap;

use cadastre_core::{AccountId, LandKey};

/// One owner's holdings, in registration order.
///
/// The running count the ledger exposes is the length of this sequence;
/// it is never stored separately, so the two cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerProfile {
    holdings: Vec<LandKey>,
}

impl OwnerProfile {
    /// Number of records this owner holds.
    pub fn total_indices(&self) -> u64 {
        self.holdings.len() as u64
    }

    /// The key at an index position, if the position is in range.
    pub fn slot(&self, position: u64) -> Option<&LandKey> {
        usize::try_from(position)
            .ok()
            .and_then(|i| self.holdings.get(i))
    }

    /// All held keys in registration order.
    pub fn holdings(&self) -> &[LandKey] {
        &self.holdings
    }

    fn push(&mut self, key: LandKey) {
        self.holdings.push(key);
    }

    /// Rebuild a profile from persisted holdings.
    pub(crate) fn from_holdings(holdings: Vec<LandKey>) -> Self {
        Self { holdings }
    }
}

/// Per-owner index of ledger keys.
///
/// Profiles are created lazily on an owner's first registration and never
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerIndex {
    owners: BTreeMap<AccountId, OwnerProfile>,
}

impl OwnerIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records the owner holds (0 if never seen). This is also
    /// the position the owner's next registration will occupy.
    pub fn holding_count(&self, owner: &AccountId) -> u64 {
        self.owners.get(owner).map_or(0, OwnerProfile::total_indices)
    }

    /// The key at `position` in the owner's list, if in range.
    pub fn slot(&self, owner: &AccountId, position: u64) -> Option<&LandKey> {
        self.owners.get(owner).and_then(|p| p.slot(position))
    }

    /// The owner's profile, if one exists yet.
    pub fn profile(&self, owner: &AccountId) -> Option<&OwnerProfile> {
        self.owners.get(owner)
    }

    /// All keys the owner holds, in registration order.
    pub fn holdings(&self, owner: &AccountId) -> &[LandKey] {
        self.owners.get(owner).map_or(&[], |p| p.holdings())
    }

    /// Append a key to the owner's list, creating the profile on first
    /// use. Returns the position the key landed in.
    pub fn append(&mut self, owner: AccountId, key: LandKey) -> u64 {
        let profile = self.owners.entry(owner).or_default();
        profile.push(key);
        profile.total_indices() - 1
    }

    /// Number of owners with at least one holding.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether no owner has registered anything yet.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Iterate (owner, profile) pairs in owner order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &OwnerProfile)> {
        self.owners.iter()
    }

    /// Insert a profile restored from a snapshot. Returns false if the
    /// owner was already present.
    pub(crate) fn insert_restored(&mut self, owner: AccountId, profile: OwnerProfile) -> bool {
        self.owners.insert(owner, profile).is_none()
    }
}
