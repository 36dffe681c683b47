//! SARIF 2.1.0 document tree.
//!
//! Every record is a plain owned struct; ownership is strictly tree-shaped.
//! Field conventions:
//!
//! - `Option<T>` is an absent (or JSON `null`) value and is kept distinct from
//!   an empty string, list or map.
//! - Keyed maps are `HashMap`s, so their iteration order carries no meaning.
//! - Cross-references such as `index` or `rule_index` are plain integers.
//! - Fields whose SARIF default is `-1` (indexes, offsets, `rank`) treat that
//!   sentinel as absent: it is never written and compares equal to `None`.
//!
//! Field declaration order is also the comparison order used by the record
//! comparers in [`crate::compare::record`].

pub mod artifact;
pub mod enums;
pub mod hdf;
pub mod log;
pub mod message;
pub mod result;
pub mod rule;
pub mod uri;

use std::collections::HashMap;

pub use artifact::{Artifact, ArtifactContent, ArtifactLocation};
pub use enums::{
    ArtifactRole, BaselineState, ColumnKind, FailureLevel, ResultKind, SarifVersion,
    ToolComponentContent,
};
pub use hdf::Ref;
pub use log::{
    Conversion, Invocation, Notification, Run, RunAutomationDetails, SarifLog, Tool,
    ToolComponent, ToolComponentReference, VersionControlDetails,
};
pub use message::{Message, MultiformatMessageString};
pub use result::{
    Address, Location, LogicalLocation, PhysicalLocation, Region, SarifResult, Stack, StackFrame,
};
pub use rule::{
    ReportingConfiguration, ReportingDescriptor, ReportingDescriptorReference,
    ReportingDescriptorRelationship,
};
pub use uri::Uri;

/// Open-ended property bag attached to most records.
pub type PropertyBag = HashMap<String, serde_json::Value>;

/// Sentinel SARIF uses for an unset index, offset or length
pub const ABSENT_INDEX: i64 = -1;

/// Sentinel SARIF uses for an unset `rank`
pub const ABSENT_RANK: f64 = -1.0;

/// `value` with the `-1` sentinel folded into `None`
pub fn present_index(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != ABSENT_INDEX)
}

/// `value` with the `-1.0` sentinel folded into `None`
pub fn present_rank(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.to_bits() != ABSENT_RANK.to_bits())
}

pub(crate) fn is_absent_index(value: &Option<i64>) -> bool {
    present_index(*value).is_none()
}

pub(crate) fn is_absent_rank(value: &Option<f64>) -> bool {
    present_rank(*value).is_none()
}
