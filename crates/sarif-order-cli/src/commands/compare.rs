//! Compare command
//!
//! Usage: sarif-order compare <LEFT> <RIGHT> [--check]

use super::read_log;
use clap::Args;
use sarif_order_core::compare::{Comparer, SarifLogComparer};
use sarif_order_core::equality::describe_difference;
use std::cmp::Ordering;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Left-hand log
    pub left: PathBuf,

    /// Right-hand log
    pub right: PathBuf,

    /// Fail unless the logs are structurally equal
    #[arg(long)]
    pub check: bool,
}

/// Execute compare command
///
/// Prints `less`, `equal` or `greater` for LEFT relative to RIGHT.
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let left = read_log(&args.left)?;
    let right = read_log(&args.right)?;

    let ordering = SarifLogComparer.compare(&left, &right);
    println!(
        "{}",
        match ordering {
            Ordering::Less => "less",
            Ordering::Equal => "equal",
            Ordering::Greater => "greater",
        }
    );

    if args.check && ordering != Ordering::Equal {
        return Err(format!(
            "{} and {} differ: {}",
            args.left.display(),
            args.right.display(),
            describe_difference(&left, &right)
        )
        .into());
    }
    Ok(())
}
