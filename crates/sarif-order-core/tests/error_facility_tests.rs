use sarif_order_core::errors::{ExError, ExErrorKind, SarifOrderError};
use std::error::Error;

#[test]
fn test_serialization_verifiable_by_kind() {
    let err: SarifOrderError = serde_json::from_str::<serde_json::Value>("{ nope")
        .unwrap_err()
        .into();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
    assert!(!ex_err.message().is_empty());
}

#[test]
fn test_round_trip_mismatch_carries_op_and_detail() {
    let err = SarifOrderError::RoundTripMismatch {
        detail: "runs[0] differs".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::RoundTripMismatch);
    assert_eq!(ex_err.code(), "ERR_ROUND_TRIP_MISMATCH");
    assert_eq!(ex_err.op(), Some("verify_round_trip"));
    assert_eq!(ex_err.message(), "runs[0] differs");
}

#[test]
fn test_semantic_mismatch_names_resource() {
    let err = SarifOrderError::SemanticMismatch {
        resource: "basic.sarif".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::SemanticMismatch);
    assert_eq!(ex_err.code(), "ERR_SEMANTIC_MISMATCH");
    assert_eq!(ex_err.resource(), Some("basic.sarif"));
}

#[test]
fn test_io_error_keeps_path() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = SarifOrderError::io("/tmp/out/Diff.sh", io);
    assert!(err.to_string().contains("/tmp/out/Diff.sh"));

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.code(), "ERR_IO");
    assert_eq!(ex_err.resource(), Some("/tmp/out/Diff.sh"));
    assert!(ex_err.message().contains("missing"));
}

#[test]
fn test_invalid_input_conversion() {
    let err = SarifOrderError::InvalidInput {
        reason: "suite 'x' has no cases".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert!(ex_err.message().contains("no cases"));
}

#[test]
fn test_ex_error_builder_pattern() {
    let ex_err = ExError::new(ExErrorKind::SemanticMismatch)
        .with_op("conformance_run")
        .with_resource("eslint")
        .with_message("1 of 2 cases differ")
        .with_candidates(vec!["b.sarif".to_string()]);

    assert_eq!(ex_err.kind(), ExErrorKind::SemanticMismatch);
    assert_eq!(ex_err.op(), Some("conformance_run"));
    assert_eq!(ex_err.resource(), Some("eslint"));
    assert!(ex_err.message().contains("differ"));
    assert_eq!(ex_err.candidates(), Some(&["b.sarif".to_string()][..]));
}

#[test]
fn test_ex_error_display() {
    let ex_err = ExError::new(ExErrorKind::RoundTripMismatch)
        .with_op("verify_round_trip")
        .with_resource("case.sarif")
        .with_message("run count differs");

    let display_str = format!("{}", ex_err);

    assert!(display_str.contains("ERR_ROUND_TRIP_MISMATCH"));
    assert!(display_str.contains("verify_round_trip"));
    assert!(display_str.contains("case.sarif"));
    assert!(display_str.contains("run count differs"));
}

#[test]
fn test_source_chain_exposed() {
    let cause = ExError::new(ExErrorKind::Io).with_message("disk full");
    let ex_err = ExError::new(ExErrorKind::SemanticMismatch)
        .with_message("could not persist case")
        .with_source(cause);

    assert_eq!(
        ex_err.source_error().map(ExError::kind),
        Some(ExErrorKind::Io)
    );
    let source = ex_err.source().map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("[ERR_IO]: disk full"));
}

#[test]
fn test_all_error_kinds_have_unique_codes() {
    use std::collections::HashSet;

    let kinds = vec![
        ExErrorKind::Serialization,
        ExErrorKind::RoundTripMismatch,
        ExErrorKind::SemanticMismatch,
        ExErrorKind::InvalidInput,
        ExErrorKind::Io,
    ];

    let codes: HashSet<_> = kinds.iter().map(|k| k.code()).collect();

    // All codes should be unique
    assert_eq!(codes.len(), kinds.len());

    // All codes should start with "ERR_"
    for code in codes {
        assert!(code.starts_with("ERR_"));
    }
}
