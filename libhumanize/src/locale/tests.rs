use super::*;
use crate::error::ErrorKind;
use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_default_locale_is_english() {
    assert_eq!(Locale::default(), Locale::English);
}

#[test]
fn test_codes_and_display() {
    assert_eq!(Locale::English.code(), "en_US");
    assert_eq!(Locale::Turkish.to_string(), "tr_TR");
}

#[test]
fn test_from_str() {
    assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::English);
    assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
    assert_eq!("tr-TR".parse::<Locale>().unwrap(), Locale::Turkish);
    assert_eq!(" TR ".parse::<Locale>().unwrap(), Locale::Turkish);

    let err = "fr_FR".parse::<Locale>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("fr_FR"));
}

#[test]
fn test_relative_time_english() {
    let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let formatter = Locale::English.relative_time();
    assert_eq!(formatter.format(b, b), "now");
    assert_eq!(formatter.format(b - Duration::days(1), b), "1 day ago");
    assert_eq!(formatter.format(b + Duration::hours(3), b), "3 hours from now");
}

#[test]
fn test_relative_time_turkish() {
    let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let formatter = Locale::Turkish.relative_time();
    let cases = [
        (Duration::seconds(1), "1 saniye önce"),
        (Duration::seconds(30), "30 saniye önce"),
        (Duration::minutes(15), "15 dakika önce"),
        (Duration::days(15), "2 hafta önce"),
        (Duration::days(99), "3 ay önce"),
        (Duration::days(400), "1 yıl önce"),
        (Duration::days(LONG_TIME / DAY), "uzun zaman önce"),
    ];
    for (elapsed, expected) in cases {
        assert_eq!(formatter.format(b - elapsed, b), expected);
    }
    assert_eq!(formatter.format(b, b), "şimdi");
    assert_eq!(formatter.format(b + Duration::days(2), b), "2 gün sonra");
}

#[test]
fn test_turkish_table_mirrors_english_bounds() {
    assert_eq!(TURKISH_MAGNITUDES.len(), DEFAULT_MAGNITUDES.len());
    for (tr, en) in TURKISH_MAGNITUDES.iter().zip(DEFAULT_MAGNITUDES) {
        assert_eq!(tr.bound, en.bound);
        assert_eq!(tr.divisor, en.divisor);
    }
}

#[test]
fn test_ordinal() {
    assert_eq!(Locale::English.ordinal(3), "3rd");
    assert_eq!(Locale::English.ordinal(112), "112th");
    assert_eq!(Locale::Turkish.ordinal(3), "3.");
    assert_eq!(Locale::Turkish.ordinal(-21), "-21.");
}

#[test]
fn test_serde_names() {
    let json = serde_json::to_string(&Locale::Turkish).unwrap();
    assert_eq!(json, "\"tr_TR\"");
    let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(parsed, Locale::English);
}
