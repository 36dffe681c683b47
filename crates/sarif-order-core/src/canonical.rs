//! Canonical form of a SARIF log.
//!
//! Producers are free to emit semantically unordered collections in any
//! order. Canonicalization sorts those collections with the record
//! comparers, so two logs describing the same findings serialize to the
//! same bytes and hash to the same digest.
//!
//! ## Sorted Collections
//!
//! - `Run.results` (nested lists are sorted first)
//! - `Result.related_locations`
//! - `Run.redaction_tokens`
//! - `ReportingDescriptor.deprecated_ids`, `deprecated_guids`, `deprecated_names`
//!
//! Lists whose positions are referenced by index elsewhere in the log
//! (artifacts, rules, logical locations, ...) keep their order.
//!
//! ## Determinism Guarantees
//!
//! - Keyed maps serialize with ordinally sorted keys
//! - Same findings in any order → same canonical JSON → same digest

use crate::compare::{Comparer, LocationComparer, Ordinal, ResultComparer};
use crate::errors::Result;
use crate::model::{ReportingDescriptor, Run, SarifLog, ToolComponent};
use crate::{log_op_end, log_op_error, log_op_start};
use sha2::{Digest, Sha256};

/// Sort every semantically unordered collection of `log` in place.
///
/// Sorting is stable, so elements that compare `Equal` keep their relative
/// order.
pub fn canonicalize(log: &mut SarifLog) {
    let runs = log.runs.as_ref().map_or(0, Vec::len);
    log_op_start!("canonicalize", run_count = runs);
    let start = std::time::Instant::now();

    for run in log.runs.iter_mut().flatten() {
        canonicalize_run(run);
    }

    log_op_end!(
        "canonicalize",
        duration_ms = start.elapsed().as_millis() as u64
    );
}

fn canonicalize_run(run: &mut Run) {
    canonicalize_component(&mut run.tool.driver);
    for component in run
        .tool
        .extensions
        .iter_mut()
        .chain(run.taxonomies.iter_mut())
        .chain(run.translations.iter_mut())
        .chain(run.policies.iter_mut())
        .flatten()
    {
        canonicalize_component(component);
    }
    if let Some(conversion) = run.conversion.as_mut() {
        canonicalize_component(&mut conversion.tool.driver);
    }

    if let Some(tokens) = run.redaction_tokens.as_mut() {
        tokens.sort_by(|a, b| Ordinal.compare(a, b));
    }

    if let Some(results) = run.results.as_mut() {
        for result in results.iter_mut() {
            if let Some(related) = result.related_locations.as_mut() {
                related.sort_by(|a, b| LocationComparer.compare(a, b));
            }
        }
        results.sort_by(|a, b| ResultComparer.compare(a, b));
    }
}

fn canonicalize_component(component: &mut ToolComponent) {
    for descriptor in component
        .rules
        .iter_mut()
        .chain(component.notifications.iter_mut())
        .chain(component.taxa.iter_mut())
        .flatten()
    {
        canonicalize_descriptor(descriptor);
    }
}

fn canonicalize_descriptor(descriptor: &mut ReportingDescriptor) {
    for ids in [
        &mut descriptor.deprecated_ids,
        &mut descriptor.deprecated_guids,
        &mut descriptor.deprecated_names,
    ]
    .into_iter()
    .flatten()
    {
        ids.sort_by(|a, b| Ordinal.compare(a, b));
    }
}

/// Canonical JSON text of `log`.
///
/// Canonicalizes a copy, converts it to a JSON value (object keys sorted
/// ordinally) and pretty-prints it. `log` itself is left untouched.
///
/// ## Errors
///
/// Returns `SarifOrderError::Serialization` if JSON serialization fails.
pub fn to_canonical_json(log: &SarifLog) -> Result<String> {
    let mut canonical = log.clone();
    canonicalize(&mut canonical);
    let value = serde_json::to_value(&canonical)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// SHA-256 digest of the canonical JSON text of `log`.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `SarifOrderError::Serialization` if JSON serialization fails.
///
/// ## Example
///
/// ```
/// use sarif_order_core::canonical::canonical_digest;
/// use sarif_order_core::model::SarifLog;
///
/// let digest = canonical_digest(&SarifLog::default()).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn canonical_digest(log: &SarifLog) -> Result<String> {
    log_op_start!("canonical_digest");
    let start = std::time::Instant::now();

    let digest = to_canonical_json(log).map(|json| hash_string(&json)).map_err(|e| {
        log_op_error!(
            "canonical_digest",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "canonical_digest",
        duration_ms = start.elapsed().as_millis() as u64,
        digest = digest.as_str()
    );
    Ok(digest)
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
