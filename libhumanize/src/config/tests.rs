use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.locale, Locale::English);

    assert_eq!(config.bytes.units, UnitSystem::Si);
    assert!(config.bytes.precision.is_none());
    assert_eq!(config.bytes.rounding, Rounding::HalfUp);

    assert!(config.time.past_label.is_none());
    assert!(config.time.future_label.is_none());
    assert_eq!(config.time.depth, 1);

    assert_eq!(config.currency.default_code, "USD");
}

#[test]
fn test_from_str_empty_yaml() {
    let config = Config::from_yaml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_str_partial_yaml() {
    let yaml = r#"
bytes:
  units: iec
time:
  depth: 3
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.bytes.units, UnitSystem::Iec);
    assert_eq!(config.time.depth, 3);

    assert_eq!(config.locale, Locale::English);
    assert_eq!(config.bytes.rounding, Rounding::HalfUp);
    assert_eq!(config.currency.default_code, "USD");
}

#[test]
fn test_from_str_full_yaml() {
    let yaml = r#"
locale: tr_TR
bytes:
  units: iec
  precision: 2
  rounding: floor
time:
  past_label: earlier
  future_label: later
  depth: 2
currency:
  default_code: INR
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.locale, Locale::Turkish);
    assert_eq!(config.bytes.units, UnitSystem::Iec);
    assert_eq!(config.bytes.precision, Some(2));
    assert_eq!(config.bytes.rounding, Rounding::Floor);
    assert_eq!(config.time.past_label.as_deref(), Some("earlier"));
    assert_eq!(config.time.future_label.as_deref(), Some("later"));
    assert_eq!(config.time.depth, 2);
    assert_eq!(config.currency.default_code, "INR");
}

#[test]
fn test_from_str_invalid_values() {
    assert!(Config::from_yaml_str("bytes: { units: decimal }").is_err());
    assert!(Config::from_yaml_str("locale: fr_FR").is_err());
    assert!(Config::from_yaml_str("time: { depth: many }").is_err());
}

#[test]
fn test_from_str_error_kind() {
    let err = Config::from_yaml_str("bytes: { rounding: sideways }").unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::Config);
}

#[test]
fn test_from_str_unknown_field() {
    let result = Config::from_yaml_str("unknown_field: true");
    assert!(result.is_ok());
}

#[test]
fn test_load_without_path_is_default() {
    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "locale: tr_TR").unwrap();
    writeln!(file, "bytes:").unwrap();
    writeln!(file, "  units: iec").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.locale, Locale::Turkish);
    assert_eq!(config.bytes.units, UnitSystem::Iec);
    assert_eq!(config.time.depth, 1);
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = Config::load(Some(&path)).unwrap_err();
    match err {
        HumanizeError::Config { path: Some(p), .. } => assert!(p.ends_with("missing.yaml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_bytes_config_options() {
    let config = BytesConfig::default();
    assert_eq!(config.table(), &SI_BYTES);
    assert_eq!(config.options(), FormatOptions::default());

    let config = BytesConfig {
        units: UnitSystem::Iec,
        precision: Some(3),
        rounding: Rounding::Ceil,
    };
    assert_eq!(config.table(), &IEC_BYTES);
    assert_eq!(config.options().precision, Precision::Natural(3));
    assert_eq!(config.options().rounding, Rounding::Ceil);
    assert!(config.options().space);
}
