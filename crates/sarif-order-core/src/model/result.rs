//! Results and the location records they point at.

use super::{
    ArtifactContent, ArtifactLocation, BaselineState, FailureLevel, Message, PropertyBag,
    ReportingDescriptorReference, ResultKind, Uri,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

/// A single analysis finding.
///
/// Named `SarifResult` to keep `std::result::Result` usable alongside it.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub rule_index: Option<i64>,
    pub rule: Option<ReportingDescriptorReference>,
    pub kind: ResultKind,
    pub level: FailureLevel,
    pub message: Message,
    pub analysis_target: Option<ArtifactLocation>,
    pub locations: Option<Vec<Location>>,
    pub guid: Option<String>,
    pub correlation_guid: Option<String>,
    pub occurrence_count: Option<i64>,
    pub partial_fingerprints: Option<HashMap<String, String>>,
    pub fingerprints: Option<HashMap<String, String>>,
    pub stacks: Option<Vec<Stack>>,
    pub related_locations: Option<Vec<Location>>,
    pub baseline_state: Option<BaselineState>,
    #[serde(skip_serializing_if = "super::is_absent_rank")]
    pub rank: Option<f64>,
    pub hosted_viewer_uri: Option<Uri>,
    pub work_item_uris: Option<Vec<Uri>>,
    pub properties: Option<PropertyBag>,
}

/// A location within a programming artifact
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub id: Option<i64>,
    pub physical_location: Option<PhysicalLocation>,
    pub logical_locations: Option<Vec<LogicalLocation>>,
    pub message: Option<Message>,
    pub annotations: Option<Vec<Region>>,
    pub properties: Option<PropertyBag>,
}

/// A physical location such as a file region or a memory address
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicalLocation {
    pub address: Option<Address>,
    pub artifact_location: Option<ArtifactLocation>,
    pub region: Option<Region>,
    pub context_region: Option<Region>,
    pub properties: Option<PropertyBag>,
}

/// A region within an artifact
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Region {
    pub start_line: Option<i64>,
    pub start_column: Option<i64>,
    pub end_line: Option<i64>,
    pub end_column: Option<i64>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub char_offset: Option<i64>,
    pub char_length: Option<i64>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub byte_offset: Option<i64>,
    pub byte_length: Option<i64>,
    pub snippet: Option<ArtifactContent>,
    pub message: Option<Message>,
    pub source_language: Option<String>,
    pub properties: Option<PropertyBag>,
}

impl Region {
    /// Region spanning a single line
    pub fn line(start_line: i64) -> Self {
        Self {
            start_line: Some(start_line),
            ..Self::default()
        }
    }
}

/// A logical location such as a namespace, type or function
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogicalLocation {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub index: Option<i64>,
    pub fully_qualified_name: Option<String>,
    pub decorated_name: Option<String>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub parent_index: Option<i64>,
    pub kind: Option<String>,
    pub properties: Option<PropertyBag>,
}

/// A memory address or address range
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub absolute_address: Option<i64>,
    pub relative_address: Option<i64>,
    pub length: Option<i64>,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub fully_qualified_name: Option<String>,
    pub offset_from_parent: Option<i64>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub parent_index: Option<i64>,
    pub properties: Option<PropertyBag>,
}

/// A call stack
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stack {
    pub message: Option<Message>,
    pub frames: Vec<StackFrame>,
    pub properties: Option<PropertyBag>,
}

/// A single frame of a call stack
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackFrame {
    pub location: Option<Location>,
    pub module: Option<String>,
    pub thread_id: Option<i64>,
    pub parameters: Option<Vec<String>>,
    pub properties: Option<PropertyBag>,
}
