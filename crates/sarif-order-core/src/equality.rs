//! Structural equality and round-trip verification.
//!
//! ## Logging Ownership
//!
//! `verify_round_trip` owns lifecycle logging for the round-trip check.
//! `equals` and `log_equals` sit on the comparison hot path and do not log.

use crate::compare::{Comparer, RunComparer, SarifLogComparer};
use crate::errors::{Result, SarifOrderError};
use crate::model::SarifLog;
use crate::{log_op_end, log_op_error, log_op_start};
use std::cmp::Ordering;

/// Structural equality under `comparer`
pub fn equals<T: ?Sized, C: Comparer<T>>(comparer: &C, left: &T, right: &T) -> bool {
    comparer.equals(left, right)
}

/// Structural equality of two whole logs
pub fn log_equals(left: &SarifLog, right: &SarifLog) -> bool {
    SarifLogComparer.equals(left, right)
}

/// Encode/decode pair used for round-trip verification
pub trait DocumentCodec {
    /// Serialize a log to text
    ///
    /// # Errors
    ///
    /// `Serialization` when the log cannot be represented.
    fn encode(&self, log: &SarifLog) -> Result<String>;

    /// Parse a log from text
    ///
    /// # Errors
    ///
    /// `Serialization` when the text is not a valid log.
    fn decode(&self, text: &str) -> Result<SarifLog>;
}

/// SARIF JSON codec backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Codec that writes compact JSON
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Codec that writes indented JSON
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DocumentCodec for JsonCodec {
    fn encode(&self, log: &SarifLog) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(log)?
        } else {
            serde_json::to_string(log)?
        };
        Ok(text)
    }

    fn decode(&self, text: &str) -> Result<SarifLog> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Verify that `log` survives an encode/decode cycle through `codec`
///
/// ## Errors
///
/// - `Serialization`: the codec failed to encode or decode
/// - `RoundTripMismatch`: the decoded log is not structurally equal to `log`
pub fn verify_round_trip<C: DocumentCodec + ?Sized>(codec: &C, log: &SarifLog) -> Result<()> {
    log_op_start!("verify_round_trip");
    let start = std::time::Instant::now();

    verify_round_trip_impl(codec, log).map_err(|e| {
        log_op_error!(
            "verify_round_trip",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "verify_round_trip",
        duration_ms = start.elapsed().as_millis() as u64
    );
    Ok(())
}

fn verify_round_trip_impl<C: DocumentCodec + ?Sized>(codec: &C, log: &SarifLog) -> Result<()> {
    let encoded = codec.encode(log)?;
    let decoded = codec.decode(&encoded)?;
    if log_equals(log, &decoded) {
        return Ok(());
    }
    Err(SarifOrderError::RoundTripMismatch {
        detail: describe_difference(log, &decoded),
    })
}

/// Coarse location of the first difference between two unequal logs
pub fn describe_difference(left: &SarifLog, right: &SarifLog) -> String {
    if left.schema != right.schema {
        return "$schema differs".to_string();
    }
    if left.version != right.version {
        return "version differs".to_string();
    }
    let empty = Vec::new();
    let left_runs = left.runs.as_ref().unwrap_or(&empty);
    let right_runs = right.runs.as_ref().unwrap_or(&empty);
    if left.runs.is_some() != right.runs.is_some() {
        return "runs present on only one side".to_string();
    }
    for (index, (l, r)) in left_runs.iter().zip(right_runs).enumerate() {
        if RunComparer.compare(l, r) != Ordering::Equal {
            return format!("runs[{}] differs", index);
        }
    }
    if left_runs.len() != right_runs.len() {
        return format!(
            "run count differs ({} vs {})",
            left_runs.len(),
            right_runs.len()
        );
    }
    "properties differ".to_string()
}
