use super::*;
use proptest::prelude::*;

#[test]
fn test_group_western() {
    assert_eq!(group("", GroupingStyle::Western), "");
    assert_eq!(group("5", GroupingStyle::Western), "5");
    assert_eq!(group("123", GroupingStyle::Western), "123");
    assert_eq!(group("1234", GroupingStyle::Western), "1,234");
    assert_eq!(group("1234567", GroupingStyle::Western), "1,234,567");
    assert_eq!(group("1234567890", GroupingStyle::Western), "1,234,567,890");
}

#[test]
fn test_group_indian() {
    let cases = [
        ("", ""),
        ("5", "5"),
        ("123", "123"),
        ("1234", "1,234"),
        ("12345", "12,345"),
        ("123456", "1,23,456"),
        ("1234567", "12,34,567"),
        ("12345678", "1,23,45,678"),
        ("123456789", "12,34,56,789"),
        ("1234567890", "1,23,45,67,890"),
        ("123456789012", "1,23,45,67,89,012"),
    ];
    for (digits, expected) in cases {
        assert_eq!(group(digits, GroupingStyle::Indian), expected);
    }
}

#[test]
fn test_group_none_is_identity() {
    assert_eq!(group("1234567", GroupingStyle::None), "1234567");
}

#[test]
fn test_group_with_custom_separator() {
    assert_eq!(
        group_with("1234567", GroupingStyle::Western, "\u{202f}"),
        "1\u{202f}234\u{202f}567"
    );
}

#[test]
fn test_comma() {
    assert_eq!(comma(0), "0");
    assert_eq!(comma(10), "10");
    assert_eq!(comma(100), "100");
    assert_eq!(comma(1000), "1,000");
    assert_eq!(comma(10000), "10,000");
    assert_eq!(comma(10_000_000), "10,000,000");
    assert_eq!(comma(123_456_789), "123,456,789");
    assert_eq!(comma(-123_456_789), "-123,456,789");
    assert_eq!(comma(-10_000_000), "-10,000,000");
    assert_eq!(comma(-1000), "-1,000");
    assert_eq!(comma(-100), "-100");
    assert_eq!(comma(-10), "-10");
}

#[test]
fn test_comma_extremes() {
    assert_eq!(comma(i64::MAX), "9,223,372,036,854,775,807");
    assert_eq!(comma(i64::MIN), "-9,223,372,036,854,775,808");
    assert_eq!(comma(u64::MAX), "18,446,744,073,709,551,615");
    assert_eq!(
        comma(i128::MIN),
        "-170,141,183,460,469,231,731,687,303,715,884,105,728"
    );
}

#[test]
fn test_comma_str_beyond_i128() {
    let digits = format!("{}000", u128::MAX);
    assert_eq!(
        comma_str(&digits).unwrap(),
        "340,282,366,920,938,463,463,374,607,431,768,211,455,000"
    );
    assert_eq!(comma_str("-1000000").unwrap(), "-1,000,000");
    assert_eq!(comma_str("+1000").unwrap(), "1,000");
    assert_eq!(comma_str("0001234").unwrap(), "1,234");
    assert_eq!(comma_str(" 12345.6789 ").unwrap(), "12,345.6789");
    assert_eq!(comma_str(".5").unwrap(), "0.5");
    assert_eq!(comma_str("7.").unwrap(), "7");
    assert_eq!(comma_str("-0.00").unwrap(), "0.00");
}

#[test]
fn test_comma_str_rejects_non_decimal_text() {
    for input in ["", "-", ".", "1,000", "12a4", "1.2.3", "--5"] {
        let err = comma_str(input).unwrap_err();
        assert!(
            matches!(err, crate::error::HumanizeError::InvalidNumber { .. }),
            "accepted {input:?}"
        );
    }
}

#[test]
fn test_commaf() {
    assert_eq!(commaf(0.0), "0");
    assert_eq!(commaf(10.11), "10.11");
    assert_eq!(commaf(100.0), "100");
    assert_eq!(commaf(1000.0), "1,000");
    assert_eq!(commaf(10_000_000.0), "10,000,000");
    assert_eq!(commaf(-10_000.5), "-10,000.5");
    assert_eq!(commaf(-0.0), "0");
}

#[test]
fn test_commaf_non_finite() {
    assert_eq!(commaf(f64::NAN), "NaN");
    assert_eq!(commaf(f64::INFINITY), "Infinity");
    assert_eq!(commaf(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_commaf_with_digits() {
    assert_eq!(commaf_with_digits(1000.0, 2), "1,000");
    assert_eq!(commaf_with_digits(10.11111, 2), "10.11");
    assert_eq!(commaf_with_digits(-1234.5678, 3), "-1,234.567");
    assert_eq!(commaf_with_digits(10.1, 5), "10.1");
}

proptest! {
    #[test]
    fn prop_comma_places_separators_every_three_digits(value in any::<i64>()) {
        let formatted = comma(value);
        prop_assert_eq!(formatted.replace(',', ""), value.to_string());

        let unsigned = formatted.trim_start_matches('-');
        let digits = unsigned.chars().filter(|c| c.is_ascii_digit()).count();
        let commas = unsigned.chars().filter(|c| *c == ',').count();
        prop_assert_eq!(commas, digits.div_ceil(3) - 1);
        prop_assert_eq!(comma_str(&value.to_string()).unwrap(), formatted.clone());

        for (i, c) in unsigned.chars().rev().enumerate() {
            if i % 4 == 3 {
                prop_assert_eq!(c, ',');
            } else {
                prop_assert!(c.is_ascii_digit());
            }
        }
    }
}
