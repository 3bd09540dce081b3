// crates/shared-kernel/tests/error_context.rs
use std::{io, path::PathBuf};

use file_analyser_shared_kernel::{AnalyserError, DomainError, ErrorContext, InfrastructureError};

fn missing() -> std::result::Result<(), InfrastructureError> {
    Err(InfrastructureError::FileRead {
        path: PathBuf::from("nope.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "root-io"),
    })
}

#[test]
fn context_wraps_and_formats() {
    let err = missing().context("counting lines").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("counting lines"));
    assert!(display.contains("Failed to read file 'nope.txt'"));
}

#[test]
fn read_error_is_visible_through_context_layers() {
    let err = missing()
        .context("inner")
        .with_context(|| "outer".to_string())
        .unwrap_err();

    assert!(err.is_read_error());
    assert!(!err.is_pattern_error());
}

#[test]
fn pattern_error_is_classified() {
    let err: AnalyserError = DomainError::InvalidPattern {
        pattern: "[".to_string(),
        details: "unclosed class".to_string(),
        source: None,
    }
    .into();

    assert!(err.is_pattern_error());
    assert!(!err.is_read_error());
    assert_eq!(err.to_string(), "Domain error: Invalid pattern '[': unclosed class");
}

#[test]
fn json_errors_become_serialization_errors() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = AnalyserError::from(json_err);
    assert!(matches!(
        err,
        AnalyserError::Infrastructure(InfrastructureError::Serialization { .. })
    ));
}
