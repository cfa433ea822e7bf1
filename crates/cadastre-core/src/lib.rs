//! # cadastre-core: Foundational Types for the Cadastre Registry
//!
//! This crate is the bedrock of the cadastre land-title registry. It defines
//! the type-system primitives every other crate in the workspace builds on;
//! it depends on nothing internal and performs no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId`, `PropertyId`,
//!    `SurveyNumber`, `Jurisdiction`, `LandKey`: identifiers are distinct
//!    types with validated constructors. No bare strings or bare integers
//!    cross a ledger boundary.
//!
//! 2. **`LandKey` is one value.** The four-part composite that identifies a
//!    parcel is a single hashable, ordered type, so ledger uniqueness is a
//!    single map lookup rather than nested per-field probing.
//!
//! 3. **`CanonicalBytes` newtype.** All digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, matching the canonicalization rules.
//!
//! 5. **`sha256_digest()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that every digest path runs through canonicalization.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cadastre-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public value types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, CoreError, ValidationError};
pub use identity::{AccountId, PropertyId, SurveyNumber};
pub use jurisdiction::{Jurisdiction, LandKey};
pub use temporal::Timestamp;
