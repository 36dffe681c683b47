//! Rule, notification and taxon metadata.

use super::{
    FailureLevel, Message, MultiformatMessageString, PropertyBag, ToolComponentReference, Uri,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

/// Metadata describing a rule, notification or taxon
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingDescriptor {
    pub id: Option<String>,
    pub deprecated_ids: Option<Vec<String>>,
    pub guid: Option<String>,
    pub deprecated_guids: Option<Vec<String>>,
    pub name: Option<String>,
    pub deprecated_names: Option<Vec<String>>,
    pub short_description: Option<MultiformatMessageString>,
    pub full_description: Option<MultiformatMessageString>,
    pub message_strings: Option<HashMap<String, MultiformatMessageString>>,
    pub default_configuration: Option<ReportingConfiguration>,
    pub help_uri: Option<Uri>,
    pub help: Option<MultiformatMessageString>,
    pub relationships: Option<Vec<ReportingDescriptorRelationship>>,
    pub properties: Option<PropertyBag>,
}

/// Default reporting behavior for a rule or notification
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingConfiguration {
    pub enabled: bool,
    pub level: FailureLevel,
    #[serde(skip_serializing_if = "super::is_absent_rank")]
    pub rank: Option<f64>,
    pub parameters: Option<PropertyBag>,
    pub properties: Option<PropertyBag>,
}

impl Default for ReportingConfiguration {
    fn default() -> Self {
        Self {
            enabled: true,
            level: FailureLevel::default(),
            rank: None,
            parameters: None,
            properties: None,
        }
    }
}

/// Reference to a descriptor, by id, index or guid
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingDescriptorReference {
    pub id: Option<String>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub index: Option<i64>,
    pub guid: Option<String>,
    pub tool_component: Option<ToolComponentReference>,
    pub properties: Option<PropertyBag>,
}

/// Relationship between two descriptors
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingDescriptorRelationship {
    pub target: ReportingDescriptorReference,
    pub kinds: Option<Vec<String>>,
    pub description: Option<Message>,
    pub properties: Option<PropertyBag>,
}
