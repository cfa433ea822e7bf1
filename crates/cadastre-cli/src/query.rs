//! Read-only query subcommand.
//!
//! Queries never write the state file back; a failed or successful lookup
//! leaves `registry.json` byte-identical.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use cadastre_core::{AccountId, Jurisdiction, LandKey, SurveyNumber};

use crate::store;

/// Arguments for the `cadastre query` subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

/// Query subcommands.
#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Show a parcel's recorded details.
    Details {
        /// State the parcel lies in.
        #[arg(long)]
        state: String,
        /// District the parcel lies in.
        #[arg(long)]
        district: String,
        /// City the parcel lies in.
        #[arg(long)]
        city: String,
        /// Survey number.
        #[arg(long)]
        survey: u64,
    },

    /// Show a parcel's request counter and property id.
    Requests {
        /// State the parcel lies in.
        #[arg(long)]
        state: String,
        /// District the parcel lies in.
        #[arg(long)]
        district: String,
        /// City the parcel lies in.
        #[arg(long)]
        city: String,
        /// Survey number.
        #[arg(long)]
        survey: u64,
    },

    /// Resolve the caller's holding at a position to its land key.
    Owned {
        /// Position within the caller's own holdings, starting at 0.
        #[arg(long)]
        position: u64,
        /// Identity of the owner.
        #[arg(long)]
        caller: String,
    },

    /// List every key an owner holds, in registration order.
    Holdings {
        /// Identity of the owner.
        #[arg(long)]
        owner: String,
    },
}

/// Execute the query subcommand.
pub fn run_query(args: &QueryArgs, state_dir: &Path) -> Result<u8> {
    match &args.command {
        QueryCommand::Details {
            state,
            district,
            city,
            survey,
        } => cmd_details(state_dir, &parse_key(state, district, city, *survey)?),

        QueryCommand::Requests {
            state,
            district,
            city,
            survey,
        } => cmd_requests(state_dir, &parse_key(state, district, city, *survey)?),

        QueryCommand::Owned { position, caller } => cmd_owned(state_dir, *position, caller),

        QueryCommand::Holdings { owner } => cmd_holdings(state_dir, owner),
    }
}

fn parse_key(state: &str, district: &str, city: &str, survey: u64) -> Result<LandKey> {
    let jurisdiction = Jurisdiction::new(state, district, city).context("invalid jurisdiction")?;
    Ok(LandKey::new(jurisdiction, SurveyNumber(survey)))
}

fn cmd_details(state_dir: &Path, key: &LandKey) -> Result<u8> {
    let registry = store::load_registry(state_dir)?;
    let details = registry.queries().land_details(key)?;

    println!("Land: {key}");
    println!("  Owner: {}", details.owner);
    println!("  Property ID: {}", details.property_id);
    println!("  Owner index: {}", details.owner_index);
    println!("  Market value: {}", details.market_value);
    println!("  Square footage: {}", details.square_footage);
    Ok(0)
}

fn cmd_requests(state_dir: &Path, key: &LandKey) -> Result<u8> {
    let registry = store::load_registry(state_dir)?;
    let summary = registry.queries().request_summary(key)?;

    println!("Land: {key}");
    println!("  Requests: {}", summary.request_count);
    println!("  Property ID: {}", summary.property_id);
    Ok(0)
}

fn cmd_owned(state_dir: &Path, position: u64, caller: &str) -> Result<u8> {
    let caller = AccountId::new(caller).context("invalid caller identity")?;
    let registry = store::load_registry(state_dir)?;
    let key = registry.queries().owner_slot(&caller, position)?;

    println!("Key: {key}");
    println!("  State: {}", key.jurisdiction.state());
    println!("  District: {}", key.jurisdiction.district());
    println!("  City: {}", key.jurisdiction.city());
    println!("  Survey number: {}", key.survey_number);
    Ok(0)
}

fn cmd_holdings(state_dir: &Path, owner: &str) -> Result<u8> {
    let owner = AccountId::new(owner).context("invalid owner identity")?;
    let registry = store::load_registry(state_dir)?;
    let holdings = registry.queries().holdings(&owner);

    if holdings.is_empty() {
        println!("No holdings for {owner}.");
        return Ok(0);
    }

    println!("Holdings for {owner} ({}):", holdings.len());
    for (position, key) in holdings.iter().enumerate() {
        println!("  [{position}] {key}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{admin, land};
    use cadastre_core::PropertyId;
    use cadastre_ledger::{ErrorKind, LandSubmission, RegistryError};

    /// State dir with one admin and two parcels for owner-y.
    fn seeded_state_dir(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let state_dir = dir.path().join("state");
        admin::run_admin(
            &admin::AdminArgs {
                command: admin::AdminCommand::Add {
                    id: "admin-x".into(),
                    state: "UP".into(),
                    district: "Allahabad".into(),
                    city: "Meja".into(),
                },
            },
            &state_dir,
        )
        .unwrap();

        for survey in [123u64, 456] {
            land::run_land(
                &land::LandArgs {
                    command: land::LandCommand::Register {
                        state: "UP".into(),
                        district: "Allahabad".into(),
                        city: "Meja".into(),
                        property_id: survey,
                        survey,
                        owner: "owner-y".into(),
                        value: 100_000,
                        sqft: 1_000,
                        caller: "admin-x".into(),
                    },
                },
                &state_dir,
            )
            .unwrap();
        }
        state_dir
    }

    fn kind_of(err: &anyhow::Error) -> Option<ErrorKind> {
        err.downcast_ref::<RegistryError>().map(RegistryError::kind)
    }

    #[test]
    fn details_of_registered_parcel() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = seeded_state_dir(&dir);

        let key = parse_key("UP", "Allahabad", "Meja", 123).unwrap();
        let result = cmd_details(&state_dir, &key);
        assert!(result.is_ok());

        let registry = store::load_registry(&state_dir).unwrap();
        let details = registry.queries().land_details(&key).unwrap();
        assert_eq!(details.property_id, PropertyId(123));
        assert_eq!(details.owner_index, 0);
    }

    #[test]
    fn details_of_unknown_parcel_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = seeded_state_dir(&dir);

        let key = parse_key("UP", "Allahabad", "Meja", 999).unwrap();
        let err = cmd_details(&state_dir, &key).unwrap_err();
        assert_eq!(kind_of(&err), Some(ErrorKind::NotFound));
    }

    #[test]
    fn requests_always_zero() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = seeded_state_dir(&dir);

        let key = parse_key("UP", "Allahabad", "Meja", 456).unwrap();
        assert!(cmd_requests(&state_dir, &key).is_ok());

        let registry = store::load_registry(&state_dir).unwrap();
        assert_eq!(registry.queries().request_summary(&key).unwrap().request_count, 0);
    }

    #[test]
    fn owned_resolves_positions() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = seeded_state_dir(&dir);

        assert!(cmd_owned(&state_dir, 0, "owner-y").is_ok());
        assert!(cmd_owned(&state_dir, 1, "owner-y").is_ok());
        let err = cmd_owned(&state_dir, 2, "owner-y").unwrap_err();
        assert_eq!(kind_of(&err), Some(ErrorKind::NotFound));
    }

    #[test]
    fn holdings_lists_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = seeded_state_dir(&dir);

        assert!(cmd_holdings(&state_dir, "owner-y").is_ok());
        // Owner with no records prints the empty message and succeeds.
        assert!(cmd_holdings(&state_dir, "owner-q").is_ok());
    }

    #[test]
    fn queries_do_not_rewrite_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = seeded_state_dir(&dir);
        let path = store::state_file(&state_dir);
        let before = std::fs::read_to_string(&path).unwrap();

        cmd_holdings(&state_dir, "owner-y").unwrap();
        let key = parse_key("UP", "Allahabad", "Meja", 123).unwrap();
        cmd_details(&state_dir, &key).unwrap();

        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn parcels_keep_distinct_property_ids() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = seeded_state_dir(&dir);

        let registry = store::load_registry(&state_dir).unwrap();
        let key = parse_key("UP", "Allahabad", "Meja", 456).unwrap();
        assert_eq!(
            registry.queries().land_details(&key).unwrap().property_id,
            PropertyId(456)
        );
    }

    #[test]
    fn lookup_against_missing_state_mentions_init() {
        let dir = tempfile::tempdir().unwrap();

        let key = parse_key("UP", "Allahabad", "Meja", 123).unwrap();
        let err = cmd_details(dir.path(), &key).unwrap_err();
        assert!(err.to_string().contains("cadastre ledger init"));
    }
}
