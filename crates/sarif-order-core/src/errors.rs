use thiserror::Error;

/// Result type alias using SarifOrderError
pub type Result<T> = std::result::Result<T, SarifOrderError>;

// Structured errors for logs, CLI output and tests

/// Classification of every failure the crate can report
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Codec
    Serialization,
    RoundTripMismatch,

    // Conformance
    SemanticMismatch,

    // Validation
    InvalidInput,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Stable `ERR_*` code, safe to match on in scripts and tests
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::RoundTripMismatch => "ERR_ROUND_TRIP_MISMATCH",
            ExErrorKind::SemanticMismatch => "ERR_SEMANTIC_MISMATCH",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Error with a stable code and optional context
///
/// Carries a classification for programmatic handling plus optional context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    resource: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Error of `kind` with no context yet
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            resource: None,
            message: String::new(),
            source: None,
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add resource context (a conformance case name or a file path)
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Add candidate resource names (the mismatched cases of a conformance run)
    pub fn with_candidates(mut self, names: Vec<String>) -> Self {
        self.candidates = Some(names);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Stable `ERR_*` code of this error's kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Operation that failed, if recorded
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the resource context, if any
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying structured error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Get candidate resource names, if any
    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(resource) = &self.resource {
            write!(f, " (resource: {})", resource)?;
        }
        if let Some(candidates) = &self.candidates {
            write!(f, " (candidates: {})", candidates.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

/// Domain error taxonomy for ordering, canonicalization and conformance
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SarifOrderError {
    /// A document could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Decoding an encoded document produced a structurally different document
    #[error("Round trip mismatch: {detail}")]
    RoundTripMismatch { detail: String },

    /// Actual and expected documents are not structurally equal
    #[error("Semantic mismatch for {resource}")]
    SemanticMismatch { resource: String },

    /// Filesystem failure while persisting or reading harness output
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    /// Caller supplied unusable input
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl SarifOrderError {
    /// Wrap an I/O failure with the path it concerns
    pub fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        SarifOrderError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from SarifOrderError to ExError
impl From<SarifOrderError> for ExError {
    fn from(err: SarifOrderError) -> Self {
        match err {
            SarifOrderError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            SarifOrderError::RoundTripMismatch { detail } => {
                ExError::new(ExErrorKind::RoundTripMismatch)
                    .with_op("verify_round_trip")
                    .with_message(detail)
            }

            SarifOrderError::SemanticMismatch { resource } => {
                ExError::new(ExErrorKind::SemanticMismatch)
                    .with_resource(resource)
                    .with_message("Actual output differs from expected output")
            }

            SarifOrderError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_resource(path)
                .with_message(message),

            SarifOrderError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}

/// Conversion from serde_json::Error to SarifOrderError
impl From<serde_json::Error> for SarifOrderError {
    fn from(err: serde_json::Error) -> Self {
        SarifOrderError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from std::io::Error to SarifOrderError, without path context
impl From<std::io::Error> for SarifOrderError {
    fn from(err: std::io::Error) -> Self {
        SarifOrderError::Io {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ExErrorKind::RoundTripMismatch, "ERR_ROUND_TRIP_MISMATCH"),
            (ExErrorKind::SemanticMismatch, "ERR_SEMANTIC_MISMATCH"),
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::Io, "ERR_IO"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_ex_error_candidates_field() {
        let err = ExError::new(ExErrorKind::SemanticMismatch)
            .with_candidates(vec!["case_a".into(), "case_b".into()]);
        let candidates = err.candidates().expect("candidates should be Some");
        assert_eq!(candidates, &["case_a".to_string(), "case_b".to_string()]);
    }

    #[test]
    fn test_ex_error_candidates_none_by_default() {
        let err = ExError::new(ExErrorKind::Io);
        assert!(err.candidates().is_none());
    }

    #[test]
    fn test_semantic_mismatch_carries_resource() {
        let ex: ExError = SarifOrderError::SemanticMismatch {
            resource: "eslint_basic".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::SemanticMismatch);
        assert_eq!(ex.resource(), Some("eslint_basic"));
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let err: SarifOrderError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, SarifOrderError::Serialization { .. }));
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let err = ExError::new(ExErrorKind::RoundTripMismatch)
            .with_op("verify_round_trip")
            .with_message("runs differ");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_ROUND_TRIP_MISMATCH]"));
        assert!(rendered.contains("verify_round_trip"));
        assert!(rendered.contains("runs differ"));
    }
}
