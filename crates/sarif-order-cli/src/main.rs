//! SARIF Order CLI
//!
//! Command-line interface for ordering, canonicalizing and checking SARIF logs

use clap::{Parser, Subcommand};
use sarif_order_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "sarif-order")]
#[command(about = "Deterministic structural ordering for SARIF logs", long_about = None)]
struct Cli {
    /// Emit JSON structured logs on stderr instead of human-readable ones
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two logs structurally
    Compare(commands::compare::CompareArgs),
    /// Write the canonical form of a log
    Canonicalize(commands::canonicalize::CanonicalizeArgs),
    /// Print the canonical digest of one or more logs
    Digest(commands::digest::DigestArgs),
    /// Check actual outputs against expected baselines
    Conform(commands::conform::ConformArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Canonicalize(args) => commands::canonicalize::execute(args),
        Commands::Digest(args) => commands::digest::execute(args),
        Commands::Conform(args) => commands::conform::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
