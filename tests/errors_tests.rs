//! Error type tests

use linkmint::errors::LinkmintError;

#[test]
fn error_codes_are_distinct() {
    let errors = [
        LinkmintError::validation("v"),
        LinkmintError::not_found("n"),
        LinkmintError::corrupt_record("c"),
        LinkmintError::storage("s"),
        LinkmintError::serialization("j"),
    ];

    let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn display_includes_type_and_message() {
    let err = LinkmintError::storage("disk full");
    assert_eq!(err.to_string(), "Storage Error: disk full");
}

#[test]
fn serde_errors_convert_to_serialization() {
    let parse_failure = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: LinkmintError = parse_failure.into();
    assert!(matches!(err, LinkmintError::Serialization(_)));
}
