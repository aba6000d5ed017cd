use super::*;
use std::error::Error;

#[test]
fn test_invalid_number_error() {
    let err = HumanizeError::InvalidNumber {
        input: "1.2.3".to_string(),
        source: None,
    };

    assert!(matches!(err, HumanizeError::InvalidNumber { .. }));
    assert!(err.to_string().contains("1.2.3"));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_invalid_unit_error() {
    let err = HumanizeError::InvalidUnit {
        unit: "jb".to_string(),
    };

    assert!(err.to_string().contains("jb"));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_overflow_error_is_range_kind() {
    let err = HumanizeError::Overflow {
        input: "16 EiB".to_string(),
    };

    assert!(err.to_string().contains("16 EiB"));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn test_invalid_format_error() {
    let err = HumanizeError::invalid_format("#,##.#", "thousands separator needs 3 digits");

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("#,##.#"));
    assert!(err.to_string().contains("3 digits"));
}

#[test]
fn test_config_error_invalid_file() {
    let err = HumanizeError::Config {
        message: "invalid config file".to_string(),
        path: Some("/path/to/config.yaml".to_string()),
        source: None,
    };

    assert!(matches!(err, HumanizeError::Config { .. }));
    assert!(err.to_string().contains("invalid config file"));
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_error_implements_error_trait() {
    let err = HumanizeError::invalid_unit("xb");

    // Should implement Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_implements_debug() {
    let err = HumanizeError::overflow("99999 YiB");

    let debug_str = format!("{:?}", err);
    assert!(!debug_str.is_empty());
}

#[test]
fn test_invalid_number_with_source() {
    let source_error = "x".parse::<u64>().unwrap_err();
    let err = HumanizeError::invalid_number_with_source("x", source_error);

    assert!(err.source().is_some());
}

#[test]
fn test_config_error_with_source() {
    let source_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");

    let err = HumanizeError::config_with_source(
        "failed to read config",
        Some("/path/to/config.yaml"),
        source_error,
    );

    assert!(err.source().is_some());
    assert!(err.source().unwrap().to_string().contains("file not found"));
}

#[test]
fn test_helper_constructors() {
    assert!(matches!(
        HumanizeError::invalid_number("abc"),
        HumanizeError::InvalidNumber { source: None, .. }
    ));
    assert!(matches!(
        HumanizeError::invalid_unit("zz"),
        HumanizeError::InvalidUnit { .. }
    ));
    assert!(matches!(
        HumanizeError::overflow("16 EiB"),
        HumanizeError::Overflow { .. }
    ));
    assert!(matches!(
        HumanizeError::config("bad", None),
        HumanizeError::Config { path: None, .. }
    ));
}
