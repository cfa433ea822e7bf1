//! Admin directory subcommand.
//!
//! `add` is an unconditional upsert, mirroring the directory semantics:
//! there is no approval step, and re-adding an identity overwrites its
//! jurisdiction.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use cadastre_core::{AccountId, Jurisdiction, Timestamp};

use crate::store;

/// Arguments for the `cadastre admin` subcommand.
#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin directory subcommands.
#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Create or overwrite an admin record.
    Add {
        /// Admin identity.
        #[arg(long)]
        id: String,
        /// State the admin belongs to.
        #[arg(long)]
        state: String,
        /// District the admin belongs to.
        #[arg(long)]
        district: String,
        /// City the admin may register land in.
        #[arg(long)]
        city: String,
    },

    /// Show an admin record.
    Show {
        /// Admin identity.
        #[arg(long)]
        id: String,
    },
}

/// Execute the admin subcommand.
pub fn run_admin(args: &AdminArgs, state_dir: &Path) -> Result<u8> {
    match &args.command {
        AdminCommand::Add {
            id,
            state,
            district,
            city,
        } => cmd_add(state_dir, id, state, district, city),
        AdminCommand::Show { id } => cmd_show(state_dir, id),
    }
}

fn cmd_add(state_dir: &Path, id: &str, state: &str, district: &str, city: &str) -> Result<u8> {
    let identity = AccountId::new(id).context("invalid admin identity")?;
    let jurisdiction =
        Jurisdiction::new(state, district, city).context("invalid jurisdiction")?;

    let mut registry = store::load_or_init_registry(state_dir)?;
    registry.add_admin(identity.clone(), jurisdiction.clone(), Timestamp::now());
    store::save_registry(state_dir, &registry)?;

    println!("OK: admin {identity} registered for {jurisdiction}");
    Ok(0)
}

fn cmd_show(state_dir: &Path, id: &str) -> Result<u8> {
    let identity = AccountId::new(id).context("invalid admin identity")?;
    let registry = store::load_registry(state_dir)?;

    match registry.admin(&identity) {
        Some(admin) => {
            println!("Admin: {}", admin.identity);
            println!("  State: {}", admin.jurisdiction.state());
            println!("  District: {}", admin.jurisdiction.district());
            println!("  City: {}", admin.jurisdiction.city());
            println!("  Added: {}", admin.added_at);
            Ok(0)
        }
        None => bail!("admin not found: {identity}"),
    }
}
