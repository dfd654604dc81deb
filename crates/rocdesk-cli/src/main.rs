//! # rocdesk CLI entry point
//!
//! Parses command-line arguments, opens the registry over the JSON file
//! backend at `--data-dir` and dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rocdesk_cli::admin::{run_clear, run_dashboard, run_hierarchy, run_seed, HierarchyArgs};
use rocdesk_cli::audit::{run_audit, AuditArgs};
use rocdesk_cli::company::{run_company, CompanyArgs};
use rocdesk_cli::director::{run_director, DirectorArgs};
use rocdesk_cli::member::{run_member, MemberArgs};
use rocdesk_store::{JsonFileBackend, Registry};

/// rocdesk — corporate compliance record keeping.
///
/// Maintains registers of companies, directors, audit engagements and
/// share-capital members over a JSON data directory, with wizard-driven
/// registration and cross-entity hierarchy views.
#[derive(Parser, Debug)]
#[command(name = "rocdesk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory holding the registry's JSON collections.
    #[arg(long, global = true, default_value = "rocdesk-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Company register operations.
    Company(CompanyArgs),

    /// Director register operations.
    Director(DirectorArgs),

    /// Audit register operations.
    Audit(AuditArgs),

    /// Share-capital member register operations.
    Member(MemberArgs),

    /// Load demonstration fixtures into an empty registry.
    Seed,

    /// Wipe every collection.
    Clear,

    /// Print registry summary counts.
    Dashboard,

    /// Resolve cross-entity relationships.
    Hierarchy(HierarchyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

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

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let backend = Arc::new(JsonFileBackend::open(&cli.data_dir)?);
    let mut registry = Registry::open(backend)?;
    tracing::debug!(data_dir = %cli.data_dir.display(), "registry opened");

    match cli.command {
        Commands::Company(args) => run_company(&args, &mut registry),
        Commands::Director(args) => run_director(&args, &mut registry),
        Commands::Audit(args) => run_audit(&args, &mut registry),
        Commands::Member(args) => run_member(&args, &mut registry),
        Commands::Seed => run_seed(&mut registry),
        Commands::Clear => run_clear(&mut registry),
        Commands::Dashboard => run_dashboard(&registry),
        Commands::Hierarchy(args) => run_hierarchy(&args, &registry),
    }
}
