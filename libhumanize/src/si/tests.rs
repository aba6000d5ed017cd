use super::*;
use crate::error::ErrorKind;

fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs() * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_si_prefixes() {
    let cases = [
        (1e-24, "1yF"),
        (1e-21, "1zF"),
        (1e-18, "1aF"),
        (1e-15, "1fF"),
        (1e-12, "1pF"),
        (2.2345e-12, "2.2345pF"),
        (1e-9, "1nF"),
        (1e-6, "1µF"),
        (1e-3, "1mF"),
        (0.0, "0F"),
        (1.0, "1F"),
        (12.0, "12F"),
        (123.0, "123F"),
        (1e3, "1kF"),
        (1e6, "1MF"),
        (1e9, "1GF"),
        (1e12, "1TF"),
        (1e15, "1PF"),
        (1e18, "1EF"),
        (1e21, "1ZF"),
        (1e24, "1YF"),
    ];
    for (value, expected) in cases {
        assert_eq!(si(value, "F"), expected, "value {value}");
    }
}

#[test]
fn test_si_clamps_outside_table() {
    assert_eq!(si(1e-25, "F"), "0.1yF");
    assert_eq!(si(1e27, "F"), "1000YF");
}

#[test]
fn test_si_negative_values() {
    assert_eq!(si(-1e6, "B"), "-1MB");
    assert_eq!(si(-2.5e-3, "s"), "-2.5ms");
}

#[test]
fn test_compute_si_promotes_exact_thousand() {
    let (value, prefix) = compute_si(1e6);
    assert_close(value, 1.0);
    assert_eq!(prefix, "M");

    let (value, prefix) = compute_si(999_000.0);
    assert_close(value, 999.0);
    assert_eq!(prefix, "k");
}

#[test]
fn test_compute_si_zero() {
    assert_eq!(compute_si(0.0), (0.0, ""));
}

#[test]
fn test_parse_si() {
    let cases = [
        ("2.2345pF", 2.2345e-12, "F"),
        ("1MB", 1e6, "B"),
        ("1 kHz", 1e3, "Hz"),
        ("15µs", 15e-6, "s"),
        ("42", 42.0, ""),
        ("-3mV", -3e-3, "V"),
        ("7 F", 7.0, "F"),
    ];
    for (text, expected, unit) in cases {
        let (value, parsed_unit) = parse_si(text).unwrap();
        assert_close(value, expected);
        assert_eq!(parsed_unit, unit, "text {text:?}");
    }
}

#[test]
fn test_parse_si_round_trips_si() {
    for value in [2.2345e-12, 1e6, 47e3, 3.3e-9] {
        let (parsed, unit) = parse_si(&si(value, "F")).unwrap();
        assert_close(parsed, value);
        assert_eq!(unit, "F");
    }
}

#[test]
fn test_parse_si_errors() {
    let err = parse_si("kHz").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);

    let err = parse_si("1.2.3k").unwrap_err();
    assert!(matches!(err, HumanizeError::InvalidNumber { .. }));
}
