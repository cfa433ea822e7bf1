//! Versioned whole-registry snapshot.
//!
//! [`RegistrySnapshot`] is the sole serde boundary of this crate. The
//! in-memory stores keep composite-typed map keys, which have no JSON
//! object-key representation, so the snapshot flattens each store into a
//! deterministically ordered vector of entry structs instead. Capture
//! emits admins, parcels, and owners sorted by their store keys; equal
//! registries therefore canonicalize to equal bytes and equal digests.
//!
//! Restore is not a blind load. A snapshot crosses a trust boundary (a
//! file on disk that anything may have edited), so [`RegistrySnapshot::restore`]
//! re-checks the cross-store invariants and rejects inconsistent input
//! with [`RegistryError::Corrupted`] rather than rebuilding a registry
//! that the mutation paths could never have produced.

use serde::{Deserialize, Serialize};

use cadastre_core::{
    AccountId, CanonicalBytes, CanonicalizationError, ContentDigest, LandKey, sha256_digest,
};

use crate::directory::{Admin, AdminDirectory};
use crate::error::RegistryError;
use crate::ledger::LandLedger;
use crate::owners::{OwnerIndex, OwnerProfile};
use crate::parcel::Land;
use crate::registry::Registry;

/// Version tag written into every snapshot. Bump on breaking layout
/// changes so old files fail loudly instead of deserializing wrong.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// One ledger record together with its composite key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelEntry {
    pub key: LandKey,
    pub record: Land,
}

/// One owner's ordered holdings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerEntry {
    pub owner: AccountId,
    pub holdings: Vec<LandKey>,
}

/// Serializable image of a whole [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub format_version: u32,
    pub admins: Vec<Admin>,
    pub parcels: Vec<ParcelEntry>,
    pub owners: Vec<OwnerEntry>,
}

impl RegistrySnapshot {
    /// Capture the registry's full state, sorted by store keys.
    pub fn capture(registry: &Registry) -> Self {
        let admins = registry.directory().iter().cloned().collect();
        let parcels = registry
            .ledger()
            .iter()
            .map(|(key, record)| ParcelEntry {
                key: key.clone(),
                record: record.clone(),
            })
            .collect();
        let owners = registry
            .owners()
            .iter()
            .map(|(owner, profile)| OwnerEntry {
                owner: owner.clone(),
                holdings: profile.holdings().to_vec(),
            })
            .collect();
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            admins,
            parcels,
            owners,
        }
    }

    /// Digest of the snapshot's canonical (RFC 8785) bytes.
    pub fn digest(&self) -> Result<ContentDigest, CanonicalizationError> {
        let bytes = CanonicalBytes::new(self)?;
        Ok(sha256_digest(&bytes))
    }

    /// Rebuild the registry, revalidating every cross-store invariant.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Corrupted`] when the snapshot carries an
    /// unsupported version, duplicate store keys, a key-record field
    /// disagreement, an owner entry with no holdings, a holding that does
    /// not resolve to a parcel owned by that owner at that position, or
    /// parcels missing from the owner index.
    pub fn restore(&self) -> Result<Registry, RegistryError> {
        if self.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(RegistryError::Corrupted {
                detail: format!(
                    "unsupported snapshot format version {} (expected {SNAPSHOT_FORMAT_VERSION})",
                    self.format_version
                ),
            });
        }

        let mut directory = AdminDirectory::new();
        for admin in &self.admins {
            if !directory.insert_restored(admin.clone()) {
                return Err(RegistryError::Corrupted {
                    detail: format!("duplicate admin record for {}", admin.identity),
                });
            }
        }

        let mut ledger = LandLedger::new();
        for entry in &self.parcels {
            if entry.record.survey_number != entry.key.survey_number {
                return Err(RegistryError::Corrupted {
                    detail: format!(
                        "parcel {} stores survey number {} under a key for {}",
                        entry.key, entry.record.survey_number, entry.key.survey_number
                    ),
                });
            }
            if !ledger.insert_restored(entry.key.clone(), entry.record.clone()) {
                return Err(RegistryError::Corrupted {
                    detail: format!("duplicate parcel record for {}", entry.key),
                });
            }
        }

        let mut owners = OwnerIndex::new();
        for entry in &self.owners {
            // Profiles only come into being with their first holding, so an
            // empty entry cannot correspond to any registration history.
            if entry.holdings.is_empty() {
                return Err(RegistryError::Corrupted {
                    detail: format!("owner index entry for {} has no holdings", entry.owner),
                });
            }
            let profile = OwnerProfile::from_holdings(entry.holdings.clone());
            if !owners.insert_restored(entry.owner.clone(), profile) {
                return Err(RegistryError::Corrupted {
                    detail: format!("duplicate owner index entry for {}", entry.owner),
                });
            }
        }

        // Every holding must resolve to a parcel recording that owner and
        // that slot; matching totals then make index and ledger a
        // bijection, so no parcel is unindexed or double-indexed.
        let mut indexed = 0usize;
        for entry in &self.owners {
            for (position, key) in entry.holdings.iter().enumerate() {
                let record = ledger.get(key).ok_or_else(|| RegistryError::Corrupted {
                    detail: format!(
                        "owner {} slot {position} references missing parcel {key}",
                        entry.owner
                    ),
                })?;
                if record.owner != entry.owner {
                    return Err(RegistryError::Corrupted {
                        detail: format!(
                            "parcel {key} is indexed under {} but owned by {}",
                            entry.owner, record.owner
                        ),
                    });
                }
                if record.owner_index != position as u64 {
                    return Err(RegistryError::Corrupted {
                        detail: format!(
                            "parcel {key} sits at slot {position} but records owner index {}",
                            record.owner_index
                        ),
                    });
                }
                indexed += 1;
            }
        }
        if indexed != ledger.len() {
            return Err(RegistryError::Corrupted {
                detail: format!(
                    "{} parcels registered but {indexed} indexed by owners",
                    ledger.len()
                ),
            });
        }

        Ok(Registry::from_parts(directory, ledger, owners))
    }
}
