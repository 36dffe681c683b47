//! Reference payload of the Heimdall Data Format (HDF) control model.
//!
//! An HDF `ref` is either free-form structured data or a plain citation
//! string. On the wire the two shapes are distinguished only by their JSON
//! type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Either a list of free-form maps or a plain string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref {
    AnythingMapArray(Vec<HashMap<String, serde_json::Value>>),
    String(String),
}

impl Ref {
    /// Ordinal of the variant, used as the first comparison key
    pub fn discriminant(&self) -> u8 {
        match self {
            Ref::AnythingMapArray(_) => 0,
            Ref::String(_) => 1,
        }
    }
}

impl From<String> for Ref {
    fn from(text: String) -> Self {
        Ref::String(text)
    }
}

impl From<Vec<HashMap<String, serde_json::Value>>> for Ref {
    fn from(maps: Vec<HashMap<String, serde_json::Value>>) -> Self {
        Ref::AnythingMapArray(maps)
    }
}
