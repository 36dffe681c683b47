//! SARIF Order Core - deterministic structural ordering of SARIF logs
//!
//! This crate provides:
//! - The SARIF 2.1.0 document model with a faithful JSON mapping
//! - A total order over every record, list, map and primitive in the model
//! - Structural equality and codec round-trip verification
//! - Canonicalization and content digests for whole logs
//! - A golden-file conformance harness built on structural equality

pub mod canonical;
pub mod compare;
pub mod conformance;
pub mod equality;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use canonical::{canonical_digest, canonicalize, to_canonical_json};
pub use compare::Comparer;
pub use conformance::{ConformanceCase, ConformanceConfig, ConformanceReport, ConformanceRun};
pub use equality::{equals, log_equals, verify_round_trip, DocumentCodec, JsonCodec};
pub use errors::{ExError, ExErrorKind, Result, SarifOrderError};
pub use model::SarifLog;

#[doc(hidden)]
pub use sarif_order_types::schema as __schema;
