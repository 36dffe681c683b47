use serde::{Deserialize, Serialize};
use std::fmt;

/// A URI or URI reference, stored exactly as it appeared in the document.
///
/// No normalization is applied: `file:///a/b` and `file:///a/./b` are
/// different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    /// Wrap literal URI text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the literal text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Uri {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Uri {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_serializes_as_plain_string() {
        let uri = Uri::new("file:///src/main.rs");
        assert_eq!(
            serde_json::to_string(&uri).unwrap(),
            r#""file:///src/main.rs""#
        );
    }

    #[test]
    fn test_uri_keeps_literal_text() {
        let uri: Uri = serde_json::from_str(r#""HTTP://Example.com/./a""#).unwrap();
        assert_eq!(uri.as_str(), "HTTP://Example.com/./a");
    }
}
