//! Digest command
//!
//! Usage: sarif-order digest <INPUT>...

use super::read_log;
use clap::Args;
use sarif_order_core::canonical::canonical_digest;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DigestArgs {
    /// Logs to hash
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

/// Execute digest command
///
/// Prints one `<digest>  <path>` line per input, in argument order.
pub fn execute(args: DigestArgs) -> Result<(), Box<dyn std::error::Error>> {
    for input in &args.inputs {
        let log = read_log(input)?;
        let digest = canonical_digest(&log)?;
        println!("{}  {}", digest, input.display());
    }
    Ok(())
}
