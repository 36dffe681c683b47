//! Enumerated SARIF field values.
//!
//! Declaration order is the ordinal order used for comparison, so variants
//! must never be reordered.

use serde::{Deserialize, Serialize};

/// Version of the log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum SarifVersion {
    #[default]
    #[serde(rename = "2.1.0")]
    V2_1_0,
}

/// Severity of a result or notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureLevel {
    None,
    Note,
    #[default]
    Warning,
    Error,
}

/// Evaluation state of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultKind {
    NotApplicable,
    Pass,
    #[default]
    Fail,
    Review,
    Open,
    Informational,
}

/// State of a result relative to a baseline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaselineState {
    New,
    Unchanged,
    Updated,
    Absent,
}

/// Unit in which column numbers are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKind {
    Utf16CodeUnits,
    UnicodeCodePoints,
}

/// Kind of data a tool component carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolComponentContent {
    LocalizedData,
    NonLocalizedData,
}

/// Role an artifact plays in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactRole {
    AnalysisTarget,
    Attachment,
    ResponseFile,
    ResultFile,
    StandardStream,
    TracedFile,
    Unmodified,
    Modified,
    Added,
    Deleted,
    Renamed,
    Uncontrolled,
    Driver,
    Extension,
    Translation,
    Taxonomy,
    Policy,
    ReferencedOnCommandLine,
    MemoryContents,
    Directory,
    UserSpecifiedConfiguration,
    ToolSpecifiedConfiguration,
    DebugOutputFile,
}
