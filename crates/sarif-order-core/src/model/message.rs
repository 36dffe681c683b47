use super::PropertyBag;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A message string or message format string rendered in multiple formats
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiformatMessageString {
    pub text: Option<String>,
    pub markdown: Option<String>,
    pub properties: Option<PropertyBag>,
}

/// Encapsulates a message intended to be read by the end user
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub text: Option<String>,
    pub markdown: Option<String>,
    pub id: Option<String>,
    pub arguments: Option<Vec<String>>,
    pub properties: Option<PropertyBag>,
}

impl Message {
    /// Create a plain-text message
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl MultiformatMessageString {
    /// Create a plain-text multiformat string
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}
