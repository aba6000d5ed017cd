//! Digit grouping for integers and decimals.
//!
//! [`group`] is a pure transformation on a run of ASCII digits; signs and
//! decimal parts are handled by the callers in this module and in
//! [`crate::currency`].

use crate::error::{HumanizeError, Result};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Where separators go in the integer part of a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingStyle {
    /// Every three digits from the right: `1,234,567`.
    #[default]
    Western,
    /// Three digits on the right, then every two: `12,34,567`.
    Indian,
    /// No separators.
    None,
}

/// Inserts commas into a digit run according to `style`.
///
/// # Examples
///
/// ```
/// use libhumanize::grouping::{group, GroupingStyle};
///
/// assert_eq!(group("1234567", GroupingStyle::Western), "1,234,567");
/// assert_eq!(group("1234567", GroupingStyle::Indian), "12,34,567");
/// assert_eq!(group("1234567", GroupingStyle::None), "1234567");
/// ```
pub fn group(digits: &str, style: GroupingStyle) -> String {
    group_with(digits, style, ",")
}

/// Like [`group`], with a caller-chosen separator.
pub fn group_with(digits: &str, style: GroupingStyle, separator: &str) -> String {
    match style {
        GroupingStyle::Western => insert_every(digits, 3, separator),
        GroupingStyle::Indian => {
            if digits.len() <= 3 {
                return digits.to_string();
            }
            let (head, tail) = digits.split_at(digits.len() - 3);
            format!("{}{}{}", insert_every(head, 2, separator), separator, tail)
        }
        GroupingStyle::None => digits.to_string(),
    }
}

fn insert_every(digits: &str, width: usize, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / width * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % width == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Formats an integer with commas after every three orders of magnitude.
///
/// Accepts any integer type up to `i128`, including `i64::MIN`.
///
/// # Examples
///
/// ```
/// use libhumanize::grouping::comma;
///
/// assert_eq!(comma(834142), "834,142");
/// assert_eq!(comma(-1000i64), "-1,000");
/// assert_eq!(comma(i64::MIN), "-9,223,372,036,854,775,808");
/// ```
pub fn comma<N: Into<i128>>(value: N) -> String {
    let value = value.into();
    let digits = group(&value.unsigned_abs().to_string(), GroupingStyle::Western);
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Formats a decimal string of any length with commas in its integer part.
///
/// Leading zeros are dropped and the fraction is kept as written. A value
/// made only of zeros loses its minus sign.
///
/// # Examples
///
/// ```
/// use libhumanize::grouping::comma_str;
///
/// assert_eq!(
///     comma_str("-340282366920938463463374607431768211456000").unwrap(),
///     "-340,282,366,920,938,463,463,374,607,431,768,211,456,000"
/// );
/// assert_eq!(comma_str("1234.5678").unwrap(), "1,234.5678");
/// assert!(comma_str("12a4").is_err());
/// ```
pub fn comma_str(text: &str) -> Result<String> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let fraction_digits = fraction.unwrap_or("");
    if (whole.is_empty() && fraction_digits.is_empty())
        || !all_digits(whole)
        || !all_digits(fraction_digits)
    {
        return Err(HumanizeError::invalid_number(text));
    }

    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    let zero = whole == "0" && fraction_digits.bytes().all(|b| b == b'0');
    let sign = if negative && !zero { "-" } else { "" };

    let grouped = group(whole, GroupingStyle::Western);
    Ok(match fraction {
        Some(fraction) if !fraction.is_empty() => format!("{sign}{grouped}.{fraction}"),
        _ => format!("{sign}{grouped}"),
    })
}

/// Formats a float with commas in its integer part, keeping the shortest
/// decimal representation of the fraction.
///
/// # Examples
///
/// ```
/// use libhumanize::grouping::commaf;
///
/// assert_eq!(commaf(834142.32), "834,142.32");
/// assert_eq!(commaf(-1000.0), "-1,000");
/// ```
pub fn commaf(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let text = value.abs().to_string();
    match text.split_once('.') {
        Some((whole, fraction)) => {
            format!("{sign}{}.{fraction}", group(whole, GroupingStyle::Western))
        }
        None => format!("{sign}{}", group(&text, GroupingStyle::Western)),
    }
}

/// Like [`commaf`], truncated to at most `decimals` fraction digits.
///
/// # Examples
///
/// ```
/// use libhumanize::grouping::commaf_with_digits;
///
/// assert_eq!(commaf_with_digits(834142.32, 1), "834,142.3");
/// assert_eq!(commaf_with_digits(834142.32, 0), "834,142");
/// ```
pub fn commaf_with_digits(value: f64, decimals: usize) -> String {
    let formatted = commaf(value);
    match formatted.find('.') {
        Some(point) if decimals == 0 => formatted[..point].to_string(),
        Some(point) => {
            let end = (point + 1 + decimals).min(formatted.len());
            formatted[..end].to_string()
        }
        None => formatted,
    }
}
