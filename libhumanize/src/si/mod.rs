//! SI-prefixed notation for dimensionless quantities.

use crate::error::{HumanizeError, Result};
use crate::number::ftoa;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Prefixes from yocto (1e-24) to yotta (1e24), one per power of 1000.
static PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

const MIN_EXPONENT: i32 = -24;
const MAX_EXPONENT: i32 = 24;

fn prefix_for(exponent: i32) -> &'static str {
    let index = (exponent - MIN_EXPONENT) / 3;
    PREFIXES.get(index as usize).copied().unwrap_or("")
}

fn exponent_for(prefix: &str) -> Option<i32> {
    PREFIXES
        .iter()
        .position(|candidate| *candidate == prefix)
        .map(|index| MIN_EXPONENT + 3 * index as i32)
}

/// Finds the SI prefix for a value and scales the value into it.
///
/// The exponent is clamped to the table, so values beyond yotta stay in
/// yotta and values below yocto stay in yocto.
///
/// # Examples
///
/// ```
/// use libhumanize::si::compute_si;
///
/// let (value, prefix) = compute_si(2.2345e-12);
/// assert!((value - 2.2345).abs() < 1e-9);
/// assert_eq!(prefix, "p");
/// ```
pub fn compute_si(input: f64) -> (f64, &'static str) {
    if input == 0.0 || !input.is_finite() {
        return (input, "");
    }

    let mut exponent = (input.abs().log10().floor() as i32).div_euclid(3) * 3;
    exponent = exponent.clamp(MIN_EXPONENT, MAX_EXPONENT);

    let mut value = scale(input, exponent);
    // log10 can land just below an exact power of ten.
    if value.abs() >= 1000.0 * (1.0 - f64::EPSILON * 4.0) && exponent < MAX_EXPONENT {
        exponent += 3;
        value = scale(input, exponent);
    }

    (value, prefix_for(exponent))
}

fn scale(input: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        input / 10f64.powi(exponent)
    } else {
        input * 10f64.powi(-exponent)
    }
}

/// Renders a value with its SI prefix and the given unit.
///
/// # Examples
///
/// ```
/// use libhumanize::si::si;
///
/// assert_eq!(si(1_000_000.0, "B"), "1MB");
/// assert_eq!(si(2.2345e-12, "F"), "2.2345pF");
/// ```
pub fn si(input: f64, unit: &str) -> String {
    let (value, prefix) = compute_si(input);
    format!("{}{prefix}{unit}", ftoa(value))
}

/// Parses SI notation back into a value and its unit.
///
/// The number may be followed by one optional space, one optional prefix
/// character and then the unit, which is returned verbatim.
///
/// # Examples
///
/// ```
/// use libhumanize::si::parse_si;
///
/// let (value, unit) = parse_si("2.2345pF").unwrap();
/// assert!((value - 2.2345e-12).abs() < 1e-20);
/// assert_eq!(unit, "F");
/// ```
pub fn parse_si(text: &str) -> Result<(f64, String)> {
    let text = text.trim();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(end);
    if number.is_empty() {
        debug!(input = text, "no numeric run in SI text");
        return Err(HumanizeError::invalid_number(text));
    }

    let value: f64 = number
        .parse()
        .map_err(|e| HumanizeError::invalid_number_with_source(text, e))?;

    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let (exponent, unit) = match rest.chars().next() {
        Some(c) => {
            let mut buf = [0u8; 4];
            match exponent_for(c.encode_utf8(&mut buf)) {
                Some(exponent) => (exponent, &rest[c.len_utf8()..]),
                None => (0, rest),
            }
        }
        None => (0, rest),
    };

    Ok((scale(value, -exponent), unit.to_string()))
}
