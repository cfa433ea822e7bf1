//! # cadastre-cli: Command-Line Interface for the Cadastre Registry
//!
//! Provides the `cadastre` binary. Each invocation loads the registry
//! snapshot from a local JSON state file, applies exactly one operation,
//! and writes the snapshot back on success, so the state file always holds
//! a registry that passed full restore validation.
//!
//! ## Subcommands
//!
//! - `cadastre admin`: admin directory management (add, show).
//! - `cadastre land`: land registration and availability release.
//! - `cadastre query`: read-only lookups (details, requests, owned, holdings).
//! - `cadastre ledger`: state file management (init, digest, verify).
//!
//! ## Layering
//!
//! Handler functions translate arguments into domain types and delegate to
//! `cadastre-ledger`; no registration or authorization rule lives here.

pub mod admin;
pub mod land;
pub mod ledger;
pub mod query;
pub mod store;

use std::path::{Path, PathBuf};

/// State directory used when neither the flag nor the environment names one.
pub const DEFAULT_STATE_DIR: &str = ".cadastre";

/// Environment variable naming the state directory.
pub const STATE_DIR_ENV: &str = "CADASTRE_STATE_DIR";

/// Resolve the state directory: the `--state-dir` flag wins, then the
/// `CADASTRE_STATE_DIR` environment variable, then [`DEFAULT_STATE_DIR`].
pub fn resolve_state_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    match std::env::var(STATE_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_STATE_DIR),
    }
}
