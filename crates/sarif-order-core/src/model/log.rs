//! Log, run and tool records.

use super::{
    Address, Artifact, ArtifactLocation, ColumnKind, FailureLevel, Location, LogicalLocation,
    Message, MultiformatMessageString, PropertyBag, ReportingDescriptor,
    ReportingDescriptorReference, SarifResult, SarifVersion, ToolComponentContent, Uri,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

/// Root of the document tree
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SarifLog {
    #[serde(rename = "$schema")]
    pub schema: Option<Uri>,
    pub version: SarifVersion,
    pub runs: Option<Vec<Run>>,
    pub properties: Option<PropertyBag>,
}

/// A single invocation of a single analysis tool
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Run {
    pub tool: Tool,
    pub invocations: Option<Vec<Invocation>>,
    pub conversion: Option<Conversion>,
    pub language: Option<String>,
    pub version_control_provenance: Option<Vec<VersionControlDetails>>,
    pub original_uri_base_ids: Option<HashMap<String, ArtifactLocation>>,
    pub artifacts: Option<Vec<Artifact>>,
    pub logical_locations: Option<Vec<LogicalLocation>>,
    pub results: Option<Vec<SarifResult>>,
    pub automation_details: Option<RunAutomationDetails>,
    pub run_aggregates: Option<Vec<RunAutomationDetails>>,
    pub baseline_guid: Option<String>,
    pub redaction_tokens: Option<Vec<String>>,
    pub default_encoding: Option<String>,
    pub default_source_language: Option<String>,
    pub newline_sequences: Option<Vec<String>>,
    pub column_kind: Option<ColumnKind>,
    pub taxonomies: Option<Vec<ToolComponent>>,
    pub addresses: Option<Vec<Address>>,
    pub translations: Option<Vec<ToolComponent>>,
    pub policies: Option<Vec<ToolComponent>>,
    pub properties: Option<PropertyBag>,
}

/// The analysis tool that was run
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tool {
    pub driver: ToolComponent,
    pub extensions: Option<Vec<ToolComponent>>,
    pub properties: Option<PropertyBag>,
}

/// A component of an analysis tool: the driver, a plugin, a taxonomy, ...
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolComponent {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub organization: Option<String>,
    pub product: Option<String>,
    pub product_suite: Option<String>,
    pub short_description: Option<MultiformatMessageString>,
    pub full_description: Option<MultiformatMessageString>,
    pub full_name: Option<String>,
    pub version: Option<String>,
    pub semantic_version: Option<String>,
    pub dotted_quad_file_version: Option<String>,
    pub release_date_utc: Option<String>,
    pub download_uri: Option<Uri>,
    pub information_uri: Option<Uri>,
    pub global_message_strings: Option<HashMap<String, MultiformatMessageString>>,
    pub notifications: Option<Vec<ReportingDescriptor>>,
    pub rules: Option<Vec<ReportingDescriptor>>,
    pub taxa: Option<Vec<ReportingDescriptor>>,
    pub locations: Option<Vec<ArtifactLocation>>,
    pub language: Option<String>,
    pub contents: Option<Vec<ToolComponentContent>>,
    pub is_comprehensive: bool,
    pub localized_data_semantic_version: Option<String>,
    pub minimum_required_localized_data_semantic_version: Option<String>,
    pub associated_component: Option<ToolComponentReference>,
    pub supported_taxonomies: Option<Vec<ToolComponentReference>>,
    pub properties: Option<PropertyBag>,
}

impl ToolComponent {
    /// Component identified by name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Reference to a tool component, by name, index or guid
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolComponentReference {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub index: Option<i64>,
    pub guid: Option<String>,
    pub properties: Option<PropertyBag>,
}

/// Runtime environment of one tool invocation
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invocation {
    pub command_line: Option<String>,
    pub arguments: Option<Vec<String>>,
    pub start_time_utc: Option<String>,
    pub end_time_utc: Option<String>,
    pub exit_code: Option<i64>,
    pub tool_execution_notifications: Option<Vec<Notification>>,
    pub tool_configuration_notifications: Option<Vec<Notification>>,
    pub exit_code_description: Option<String>,
    pub exit_signal_name: Option<String>,
    pub exit_signal_number: Option<i64>,
    pub process_start_failure_message: Option<String>,
    pub execution_successful: bool,
    pub machine: Option<String>,
    pub account: Option<String>,
    pub process_id: Option<i64>,
    pub working_directory: Option<ArtifactLocation>,
    pub environment_variables: Option<HashMap<String, String>>,
    pub properties: Option<PropertyBag>,
}

/// A condition encountered by the tool during its execution
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notification {
    pub locations: Option<Vec<Location>>,
    pub message: Message,
    pub level: FailureLevel,
    pub thread_id: Option<i64>,
    pub time_utc: Option<String>,
    pub descriptor: Option<ReportingDescriptorReference>,
    pub associated_rule: Option<ReportingDescriptorReference>,
    pub properties: Option<PropertyBag>,
}

/// How this log was produced from another tool's native output
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Conversion {
    pub tool: Tool,
    pub invocation: Option<Invocation>,
    pub analysis_tool_log_files: Option<Vec<ArtifactLocation>>,
    pub properties: Option<PropertyBag>,
}

/// Version control state of the analyzed sources
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionControlDetails {
    pub repository_uri: Option<Uri>,
    pub revision_id: Option<String>,
    pub branch: Option<String>,
    pub revision_tag: Option<String>,
    pub as_of_time_utc: Option<String>,
    pub mapped_to: Option<ArtifactLocation>,
    pub properties: Option<PropertyBag>,
}

/// Identity of a run within an automation system
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunAutomationDetails {
    pub description: Option<Message>,
    pub id: Option<String>,
    pub guid: Option<String>,
    pub correlation_guid: Option<String>,
    pub properties: Option<PropertyBag>,
}
