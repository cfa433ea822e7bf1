//! # cadastre-ledger: The Land-Title Ledger
//!
//! Records which administrative authority registered a parcel, who owns it,
//! and whether the owner has flagged it as available for transfer. This
//! crate is the part with invariants to protect: admin authorization,
//! composite-key uniqueness, ownership indexing, and the one-way
//! availability transition.
//!
//! Everything about how calls reach the ledger (signing, execution
//! environment, fees, consensus) is an external collaborator. The ledger
//! consumes an already-authenticated [`CallContext`] and call arguments,
//! and produces a new state plus a result or a rejection.
//!
//! ## Execution Model
//!
//! Strictly serial and transactional. Mutating operations take `&mut self`
//! on [`Registry`], so exclusive access is enforced by the borrow checker;
//! an embedder targeting threads wraps the registry in its own exclusive
//! section. Every operation validates before it mutates: a rejected call
//! leaves state exactly as it was.
//!
//! ## Crate Policy
//!
//! - No I/O, no clock. Timestamps arrive in the [`CallContext`].
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The [`snapshot`] module is the only serde boundary for whole-registry
//!   state; restore revalidates cross-store invariants.

pub mod context;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod owners;
pub mod parcel;
pub mod query;
pub mod registry;
pub mod snapshot;

// Re-export primary types for ergonomic imports.
pub use context::CallContext;
pub use directory::{Admin, AdminDirectory};
pub use error::{ErrorKind, RegistryError};
pub use ledger::LandLedger;
pub use owners::{OwnerIndex, OwnerProfile};
pub use parcel::{Land, LandSubmission};
pub use query::{LandDetails, QueryService, RequestSummary};
pub use registry::Registry;
pub use snapshot::{OwnerEntry, ParcelEntry, RegistrySnapshot, SNAPSHOT_FORMAT_VERSION};
