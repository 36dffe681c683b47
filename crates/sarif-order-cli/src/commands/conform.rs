//! Conform command
//!
//! Usage: sarif-order conform --suite <NAME> --actual <DIR> --expected <DIR> --output <DIR>

use clap::Args;
use sarif_order_core::conformance::{cases_from_dirs, ConformanceConfig, ConformanceRun};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConformArgs {
    /// Suite name used for output directories and script names
    #[arg(long)]
    pub suite: String,

    /// Directory of actual `.sarif` outputs
    #[arg(long)]
    pub actual: PathBuf,

    /// Directory of expected `.sarif` baselines
    #[arg(long)]
    pub expected: PathBuf,

    /// Root directory for persisted cases and generated scripts
    #[arg(long)]
    pub output: PathBuf,

    /// Skip the codec round-trip check on actual outputs
    #[arg(long)]
    pub no_round_trip: bool,

    /// Fail cases whose first invocation reports tool notifications
    #[arg(long)]
    pub forbid_notifications: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute conform command
pub fn execute(args: ConformArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cases = cases_from_dirs(&args.actual, &args.expected)?;
    let config = ConformanceConfig::new(&args.suite, &args.output, &args.expected)
        .with_round_trip(!args.no_round_trip)
        .with_forbid_notifications(args.forbid_notifications);

    let report = ConformanceRun::new(config).with_cases(cases).execute()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} cases, {} mismatched",
            report.suite,
            report.case_count,
            report.mismatches.len()
        );
        for mismatch in &report.mismatches {
            println!("  {}: {:?}", mismatch.name, mismatch.reason);
        }
    }

    match report.to_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
