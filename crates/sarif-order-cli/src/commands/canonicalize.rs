//! Canonicalize command
//!
//! Usage: sarif-order canonicalize <INPUT> [--output <FILE>]

use super::read_log;
use clap::Args;
use sarif_order_core::canonical::to_canonical_json;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CanonicalizeArgs {
    /// Log to canonicalize
    pub input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute canonicalize command
pub fn execute(args: CanonicalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let log = read_log(&args.input)?;
    let json = to_canonical_json(&log)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, format!("{}\n", json))?;
        eprintln!("Canonical log written to: {}", output_path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}
