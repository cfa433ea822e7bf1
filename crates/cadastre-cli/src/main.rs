//! # cadastre CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! All registry semantics live in `cadastre-ledger`; this binary only
//! wires arguments, the state file, and process exit codes together.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cadastre_cli::admin::{run_admin, AdminArgs};
use cadastre_cli::land::{run_land, LandArgs};
use cadastre_cli::ledger::{run_ledger, LedgerArgs};
use cadastre_cli::query::{run_query, QueryArgs};
use cadastre_cli::resolve_state_dir;

/// Land-title registry over a local state file.
///
/// Admins are registered per city and may only register land in their own
/// city; owners release their holdings by position. State is a single JSON
/// snapshot validated on every load.
#[derive(Parser, Debug)]
#[command(name = "cadastre", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the registry state file. Overrides CADASTRE_STATE_DIR.
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Admin directory management (add, show).
    Admin(AdminArgs),

    /// Land registration and availability release.
    Land(LandArgs),

    /// Read-only registry lookups.
    Query(QueryArgs),

    /// State file management (init, digest, verify).
    Ledger(LedgerArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let state_dir = resolve_state_dir(cli.state_dir.as_deref());
    tracing::debug!(state_dir = %state_dir.display(), "cadastre CLI starting");

    let result = match cli.command {
        Commands::Admin(args) => run_admin(&args, &state_dir),
        Commands::Land(args) => run_land(&args, &state_dir),
        Commands::Query(args) => run_query(&args, &state_dir),
        Commands::Ledger(args) => run_ledger(&args, &state_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
