//! Land registration and release subcommand.
//!
//! Both commands name their caller explicitly with `--caller`; the state
//! file carries no session, so each invocation says who it acts as. The
//! ledger decides whether that caller is allowed to do what it asked.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use cadastre_core::{AccountId, Jurisdiction, PropertyId, SurveyNumber, Timestamp};
use cadastre_ledger::{CallContext, LandSubmission};

use crate::store;

/// Arguments for the `cadastre land` subcommand.
#[derive(Args, Debug)]
pub struct LandArgs {
    #[command(subcommand)]
    pub command: LandCommand,
}

/// Land subcommands.
#[derive(Subcommand, Debug)]
pub enum LandCommand {
    /// Register a new parcel. The caller must be an admin for the city.
    Register {
        /// State the parcel lies in.
        #[arg(long)]
        state: String,
        /// District the parcel lies in.
        #[arg(long)]
        district: String,
        /// City the parcel lies in.
        #[arg(long)]
        city: String,
        /// Caller-supplied property identifier (not checked for uniqueness).
        #[arg(long)]
        property_id: u64,
        /// Survey number; unique within (state, district, city).
        #[arg(long)]
        survey: u64,
        /// Identity of the new owner.
        #[arg(long)]
        owner: String,
        /// Market value.
        #[arg(long)]
        value: u64,
        /// Square footage.
        #[arg(long)]
        sqft: u64,
        /// Identity of the registering admin.
        #[arg(long)]
        caller: String,
    },

    /// Flag the caller's holding at a position as available for transfer.
    Release {
        /// Position within the caller's own holdings, starting at 0.
        #[arg(long)]
        position: u64,
        /// Identity of the owner releasing the parcel.
        #[arg(long)]
        caller: String,
    },
}

/// Execute the land subcommand.
pub fn run_land(args: &LandArgs, state_dir: &Path) -> Result<u8> {
    match &args.command {
        LandCommand::Register {
            state,
            district,
            city,
            property_id,
            survey,
            owner,
            value,
            sqft,
            caller,
        } => {
            let submission = LandSubmission {
                jurisdiction: Jurisdiction::new(state, district, city)
                    .context("invalid jurisdiction")?,
                property_id: PropertyId(*property_id),
                survey_number: SurveyNumber(*survey),
                owner: AccountId::new(owner).context("invalid owner identity")?,
                market_value: *value,
                square_footage: *sqft,
            };
            cmd_register(state_dir, submission, caller)
        }

        LandCommand::Release { position, caller } => cmd_release(state_dir, *position, caller),
    }
}

fn cmd_register(state_dir: &Path, submission: LandSubmission, caller: &str) -> Result<u8> {
    let caller = AccountId::new(caller).context("invalid caller identity")?;
    let ctx = CallContext::new(caller, Timestamp::now());

    let mut registry = store::load_registry(state_dir)?;
    let key = registry.register_land(submission, &ctx)?;
    let position = registry.queries().land_details(&key)?.owner_index;
    store::save_registry(state_dir, &registry)?;

    println!("OK: registered {key} at owner position {position}");
    Ok(0)
}

fn cmd_release(state_dir: &Path, position: u64, caller: &str) -> Result<u8> {
    let caller = AccountId::new(caller).context("invalid caller identity")?;
    let ctx = CallContext::new(caller.clone(), Timestamp::now());

    let mut registry = store::load_registry(state_dir)?;
    registry.mark_available(position, &ctx)?;
    store::save_registry(state_dir, &registry)?;

    println!("OK: holding {position} of {caller} marked available");
    Ok(0)
}
