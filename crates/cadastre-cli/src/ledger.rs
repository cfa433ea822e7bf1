//! State file management subcommand.
//!
//! `digest` and `verify` work over the snapshot's canonical bytes, so two
//! state files holding the same registry always agree on the digest even
//! if their JSON whitespace differs.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use cadastre_ledger::Registry;

use crate::store;

/// Arguments for the `cadastre ledger` subcommand.
#[derive(Args, Debug)]
pub struct LedgerArgs {
    #[command(subcommand)]
    pub command: LedgerCommand,
}

/// Ledger state file subcommands.
#[derive(Subcommand, Debug)]
pub enum LedgerCommand {
    /// Create an empty registry state file.
    Init,

    /// Print the canonical digest of the current registry state.
    Digest,

    /// Check the current registry state against an expected digest.
    Verify {
        /// Expected digest, `sha256:<hex>`.
        #[arg(long)]
        digest: String,
    },
}

/// Execute the ledger subcommand.
pub fn run_ledger(args: &LedgerArgs, state_dir: &Path) -> Result<u8> {
    match &args.command {
        LedgerCommand::Init => cmd_init(state_dir),
        LedgerCommand::Digest => cmd_digest(state_dir),
        LedgerCommand::Verify { digest } => cmd_verify(state_dir, digest),
    }
}

fn cmd_init(state_dir: &Path) -> Result<u8> {
    let path = store::state_file(state_dir);
    if path.exists() {
        bail!("registry state already exists at {}", path.display());
    }

    store::save_registry(state_dir, &Registry::new())?;
    println!("OK: initialized empty registry at {}", path.display());
    Ok(0)
}

fn cmd_digest(state_dir: &Path) -> Result<u8> {
    let registry = store::load_registry(state_dir)?;
    let digest = registry
        .snapshot()
        .digest()
        .context("failed to canonicalize registry snapshot")?;

    println!("{digest}");
    Ok(0)
}

fn cmd_verify(state_dir: &Path, expected: &str) -> Result<u8> {
    let registry = store::load_registry(state_dir)?;
    let actual = registry
        .snapshot()
        .digest()
        .context("failed to canonicalize registry snapshot")?;

    if actual.to_string() != expected {
        bail!("digest mismatch: state is {actual}, expected {expected}");
    }

    println!("OK: digest matches");
    Ok(0)
}
