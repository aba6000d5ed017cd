//! Float rendering: trailing-zero trimming and directive-driven formatting.

use crate::error::{HumanizeError, Result};
use crate::grouping::{GroupingStyle, group_with};
use crate::magnitude::strip_trailing_zeros;


const MAX_PRECISION: usize = 9;

/// Converts a float to a string with six decimals, then drops trailing zeros.
///
/// # Examples
///
/// ```
/// use libhumanize::number::ftoa;
///
/// assert_eq!(ftoa(200.0), "200");
/// assert_eq!(ftoa(2.02), "2.02");
/// ```
pub fn ftoa(value: f64) -> String {
    ftoa_with_digits(value, 6)
}

/// Converts a float to a string with at most `digits` decimals and no
/// trailing zeros.
pub fn ftoa_with_digits(value: f64, digits: usize) -> String {
    strip_trailing_zeros(&format!("{value:.digits$}")).to_string()
}

/// Formats a float following a `#,###.##` style directive.
///
/// The directive is a run of `#` (or `0`) digit placeholders with up to three
/// meaningful characters:
///
/// * an optional leading `+` to print the sign of positive numbers,
/// * an optional thousands separator, which must be followed by exactly
///   three placeholders before the next directive,
/// * a decimal separator; the number of placeholders after it is the
///   precision (at most 9).
///
/// An empty directive means `#,###.##`. A directive with no separators prints
/// nine decimals and no grouping. NaN and infinities render as `NaN`,
/// `Infinity` and `-Infinity` regardless of the directive.
///
/// # Examples
///
/// ```
/// use libhumanize::number::format_float;
///
/// assert_eq!(format_float("", 12345.6789).unwrap(), "12,345.68");
/// assert_eq!(format_float("#.###,##", 12345.6789).unwrap(), "12.345,68");
/// assert_eq!(format_float("#.", 12345.6789).unwrap(), "12346");
/// ```
pub fn format_float(format: &str, value: f64) -> Result<String> {
    if value.is_nan() {
        return Ok("NaN".to_string());
    }
    if value.is_infinite() {
        return Ok(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string());
    }

    let directive = Directive::parse(format)?;

    let (sign, magnitude) = if value >= 1e-9 {
        (directive.positive, value)
    } else if value <= -1e-9 {
        ("-", -value)
    } else {
        ("", 0.0)
    };

    let factor = 10f64.powi(directive.precision as i32);
    let shifted = magnitude + 0.5 / factor;
    let whole = format!("{:.0}", shifted.trunc());
    let whole = match &directive.thousands {
        Some(separator) => group_with(&whole, GroupingStyle::Western, separator),
        None => whole,
    };

    if directive.precision == 0 {
        return Ok(format!("{sign}{whole}"));
    }

    let fraction = (shifted.fract() * factor) as u64;
    Ok(format!(
        "{sign}{whole}{}{fraction:0width$}",
        directive.decimal,
        width = directive.precision
    ))
}

struct Directive {
    positive: &'static str,
    thousands: Option<String>,
    decimal: String,
    precision: usize,
}

impl Directive {
    fn parse(format: &str) -> Result<Self> {
        if format.is_empty() {
            return Ok(Self {
                positive: "",
                thousands: Some(",".to_string()),
                decimal: ".".to_string(),
                precision: 2,
            });
        }

        let chars: Vec<char> = format.chars().collect();
        let mut marks: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != '#' && **c != '0')
            .map(|(i, _)| i)
            .collect();

        let mut directive = Self {
            positive: "",
            thousands: None,
            decimal: ".".to_string(),
            precision: MAX_PRECISION,
        };

        if marks.first() == Some(&0) {
            if chars[0] != '+' {
                return Err(HumanizeError::invalid_format(
                    format,
                    "leading directive must be '+'",
                ));
            }
            directive.positive = "+";
            marks.remove(0);
        }

        match marks.as_slice() {
            [] => {}
            [decimal] => {
                directive.decimal = chars[*decimal].to_string();
                directive.precision = chars.len() - decimal - 1;
            }
            [thousands, decimal] => {
                if decimal - thousands != 4 {
                    return Err(HumanizeError::invalid_format(
                        format,
                        "thousands separator must be followed by 3 digit placeholders",
                    ));
                }
                directive.thousands = Some(chars[*thousands].to_string());
                directive.decimal = chars[*decimal].to_string();
                directive.precision = chars.len() - decimal - 1;
            }
            _ => {
                return Err(HumanizeError::invalid_format(format, "too many directives"));
            }
        }

        if directive.precision > MAX_PRECISION {
            return Err(HumanizeError::invalid_format(
                format,
                format!("precision is limited to {MAX_PRECISION} digits"),
            ));
        }
        Ok(directive)
    }
}
