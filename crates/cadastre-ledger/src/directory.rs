//! # Admin Directory
//!
//! Maps an identity to the jurisdiction it is authorized to administer.
//! Registration consults this directory to answer one question: may this
//! caller register land in that city?
//!
//! `add_admin` is an unconditional upsert with no authorization check of
//! its own: any caller may register or overwrite any admin identity. That
//! is the specified behavior of this scope (an admin-approval workflow is
//! a likely future feature), preserved rather than second-guessed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cadastre_core::{AccountId, Jurisdiction, Timestamp};

/// A registered land administration authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// The admin's identity, unique within the directory.
    pub identity: AccountId,
    /// The (state, district, city) scope this admin administers.
    /// Only the city is consulted during registration checks.
    pub jurisdiction: Jurisdiction,
    /// When this record was created or last overwritten.
    pub added_at: Timestamp,
}

/// Directory of admin identities and their jurisdictions.
///
/// Exactly one record per identity; re-adding overwrites (no merge).
/// Records are never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminDirectory {
    admins: BTreeMap<AccountId, Admin>,
}

impl AdminDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an admin for a jurisdiction. Unconditional upsert: creates
    /// the record or overwrites an existing one, jurisdiction and
    /// timestamp both. Never fails.
    pub fn add_admin(&mut self, identity: AccountId, jurisdiction: Jurisdiction, at: Timestamp) {
        let admin = Admin {
            identity: identity.clone(),
            jurisdiction,
            added_at: at,
        };
        self.admins.insert(identity, admin);
    }

    /// Look up the admin record for an identity.
    pub fn lookup(&self, identity: &AccountId) -> Option<&Admin> {
        self.admins.get(identity)
    }

    /// Number of registered admins.
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    /// Whether the directory has no admins.
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }

    /// Iterate admins in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &Admin> {
        self.admins.values()
    }

    /// Insert a record restored from a snapshot, keyed by its identity.
    /// Returns false if the identity was already present.
    pub(crate) fn insert_restored(&mut self, admin: Admin) -> bool {
        self.admins.insert(admin.identity.clone(), admin).is_none()
    }
}
