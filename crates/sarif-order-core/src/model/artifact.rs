use super::{ArtifactRole, Message, MultiformatMessageString, PropertyBag, Uri};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

/// Specifies the location of an artifact
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtifactLocation {
    pub uri: Option<Uri>,
    pub uri_base_id: Option<String>,
    /// Index into `run.artifacts`; `-1` means absent
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub index: Option<i64>,
    pub description: Option<Message>,
    pub properties: Option<PropertyBag>,
}

impl ArtifactLocation {
    /// Location addressed by URI only
    pub fn from_uri(uri: impl Into<Uri>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }
}

/// Contents of an artifact or a portion of one
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtifactContent {
    pub text: Option<String>,
    pub binary: Option<String>,
    pub rendered: Option<MultiformatMessageString>,
    pub properties: Option<PropertyBag>,
}

/// A single artifact analyzed or referenced by a run
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artifact {
    pub description: Option<Message>,
    pub location: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub parent_index: Option<i64>,
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "super::is_absent_index")]
    pub length: Option<i64>,
    pub roles: Option<Vec<ArtifactRole>>,
    pub mime_type: Option<String>,
    pub contents: Option<ArtifactContent>,
    pub encoding: Option<String>,
    pub source_language: Option<String>,
    /// Digests keyed by algorithm name
    pub hashes: Option<HashMap<String, String>>,
    pub last_modified_time_utc: Option<String>,
    pub properties: Option<PropertyBag>,
}
