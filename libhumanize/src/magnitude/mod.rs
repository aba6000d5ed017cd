//! Magnitude selection, rounding and unit-suffix parsing.
//!
//! This module holds the table-driven algorithm shared by the byte, bit and
//! big-byte formatters: pick the largest unit whose multiplier does not exceed
//! the quantity, scale, round, and render `"<value> <unit>"`. The inverse
//! parser scans a numeric run followed by a unit suffix.

use crate::error::{HumanizeError, Result};
use tracing::{debug, trace};


/// An ordered list of unit suffixes where unit `i` is worth `base^i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeTable {
    /// Multiplier between consecutive units (1000 or 1024).
    pub base: u32,
    /// Unit suffixes in ascending order, starting with the base unit.
    pub units: &'static [&'static str],
}

/// SI byte units (kB, MB, ...) that fit in a `u64`.
pub static SI_BYTES: MagnitudeTable = MagnitudeTable {
    base: 1000,
    units: &["B", "kB", "MB", "GB", "TB", "PB", "EB"],
};

/// IEC byte units (KiB, MiB, ...) that fit in a `u64`.
pub static IEC_BYTES: MagnitudeTable = MagnitudeTable {
    base: 1024,
    units: &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"],
};

/// SI bit units.
pub static SI_BITS: MagnitudeTable = MagnitudeTable {
    base: 1000,
    units: &["b", "kb", "Mb", "Gb", "Tb", "Pb", "Eb"],
};

/// IEC bit units.
pub static IEC_BITS: MagnitudeTable = MagnitudeTable {
    base: 1024,
    units: &["b", "Kib", "Mib", "Gib", "Tib", "Pib", "Eib"],
};

/// SI byte units up to yottabytes, for `u128` quantities.
pub static BIG_SI_BYTES: MagnitudeTable = MagnitudeTable {
    base: 1000,
    units: &["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"],
};

/// IEC byte units up to yobibytes, for `u128` quantities.
pub static BIG_IEC_BYTES: MagnitudeTable = MagnitudeTable {
    base: 1024,
    units: &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"],
};

impl MagnitudeTable {
    /// Returns the multiplier of the unit at `exponent`, or `None` when it
    /// does not fit in a `u128`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::magnitude::IEC_BYTES;
    ///
    /// assert_eq!(IEC_BYTES.multiplier(2), Some(1024 * 1024));
    /// assert_eq!(IEC_BYTES.multiplier(13), None);
    /// ```
    pub fn multiplier(&self, exponent: usize) -> Option<u128> {
        u128::from(self.base).checked_pow(u32::try_from(exponent).ok()?)
    }

    fn float_multiplier(&self, exponent: usize) -> f64 {
        f64::from(self.base).powi(i32::try_from(exponent).unwrap_or(i32::MAX))
    }

    /// Returns the index of the largest unit.
    pub fn max_exponent(&self) -> usize {
        self.units.len().saturating_sub(1)
    }

    /// Returns the exponent of a lowercased suffix, accepting both the full
    /// form ("mib", "mb") and the bare form without the trailing `b` ("mi", "m").
    fn lookup(&self, suffix: &str) -> Option<usize> {
        self.units.iter().position(|unit| {
            let full = unit.to_ascii_lowercase();
            let bare = full.strip_suffix('b').unwrap_or(&full);
            suffix == full || suffix == bare
        })
    }
}

/// How the scaled value is brought down to the requested precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round half away from zero.
    #[default]
    HalfUp,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
}

/// Number of decimals rendered for the scaled value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precision {
    /// One decimal below 10, none from 10 upward (`"1.0 KiB"`, `"84 TiB"`).
    #[default]
    Adaptive,
    /// Round to the given decimals, then drop trailing zeros (`"1.02 kB"`, `"1 GB"`).
    Natural(usize),
    /// Round to the given decimals and keep them all (`"1.00 GB"`).
    Fixed(usize),
}

/// Rendering options for [`format_count`] and [`format_magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub precision: Precision,
    pub rounding: Rounding,
    /// Put a space between the value and the unit.
    pub space: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: Precision::Adaptive,
            rounding: Rounding::HalfUp,
            space: true,
        }
    }
}

impl FormatOptions {
    /// Natural precision with the given rounding mode.
    pub fn natural(digits: usize, rounding: Rounding) -> Self {
        Self {
            precision: Precision::Natural(digits),
            rounding,
            space: true,
        }
    }

    /// Same options without the space before the unit.
    pub fn compact(self) -> Self {
        Self {
            space: false,
            ..self
        }
    }
}

/// Formats an integer quantity against a magnitude table.
///
/// The exponent is selected with integer arithmetic, so an exact power of
/// the base always lands on its own unit. Quantities beyond the largest unit
/// saturate at that unit.
///
/// # Examples
///
/// ```
/// use libhumanize::magnitude::{format_count, FormatOptions, IEC_BYTES, SI_BYTES};
///
/// assert_eq!(format_count(1024, &IEC_BYTES, FormatOptions::default()), "1.0 KiB");
/// assert_eq!(format_count(1000, &SI_BYTES, FormatOptions::default()), "1.0 kB");
/// assert_eq!(format_count(999, &SI_BYTES, FormatOptions::default()), "999 B");
/// ```
pub fn format_count(count: u128, table: &MagnitudeTable, options: FormatOptions) -> String {
    let base = u128::from(table.base);
    let mut exponent = 0;
    let mut multiplier: u128 = 1;
    while exponent < table.max_exponent() {
        match multiplier.checked_mul(base) {
            Some(next) if next <= count => {
                multiplier = next;
                exponent += 1;
            }
            _ => break,
        }
    }

    if exponent == table.max_exponent() && count / multiplier >= base {
        debug!(
            count,
            unit = table.units[exponent],
            "quantity exceeds largest unit, saturating"
        );
    }

    if exponent == 0 {
        return join(&count.to_string(), table.units[0], options.space);
    }

    match render_exact(count, multiplier, options) {
        Some(number) => join(&number, table.units[exponent], options.space),
        None => {
            trace!(count, "scaled quantity overflows u128, rounding as f64");
            let value = count as f64 / multiplier as f64;
            render(value, table.units[exponent], options)
        }
    }
}

/// Renders `count / multiplier` with integer rounding, or `None` when the
/// scaled quantity does not fit in a `u128`.
fn render_exact(count: u128, multiplier: u128, options: FormatOptions) -> Option<String> {
    let digits = match options.precision {
        Precision::Adaptive => 1,
        Precision::Natural(digits) | Precision::Fixed(digits) => digits,
    };
    let scaled = count.checked_mul(10u128.checked_pow(u32::try_from(digits).ok()?)?)?;
    let rounded = divide(scaled, multiplier, options.rounding);

    let number = match options.precision {
        Precision::Adaptive if rounded < 100 => place_point(rounded, 1),
        Precision::Adaptive => {
            // Tenths are brought to a whole number ties-to-even, like `{:.0}`.
            let (whole, tenth) = (rounded / 10, rounded % 10);
            let up = tenth > 5 || (tenth == 5 && whole % 2 == 1);
            (whole + u128::from(up)).to_string()
        }
        Precision::Natural(digits) => {
            strip_trailing_zeros(&place_point(rounded, digits)).to_string()
        }
        Precision::Fixed(digits) => place_point(rounded, digits),
    };
    Some(number)
}

fn divide(numerator: u128, denominator: u128, rounding: Rounding) -> u128 {
    let (quotient, remainder) = (numerator / denominator, numerator % denominator);
    let up = match rounding {
        Rounding::Floor => false,
        Rounding::Ceil => remainder != 0,
        Rounding::HalfUp => remainder >= denominator - remainder,
    };
    quotient + u128::from(up)
}

/// Renders `value / 10^digits` from its integer digits.
fn place_point(value: u128, digits: usize) -> String {
    let text = format!("{value:0>width$}", width = digits + 1);
    if digits == 0 {
        return text;
    }
    let (whole, fraction) = text.split_at(text.len() - digits);
    format!("{whole}.{fraction}")
}

/// Formats a real quantity against a magnitude table.
///
/// Negative quantities keep their sign; non-finite inputs render as
/// `"NaN"`, `"Infinity"` or `"-Infinity"`.
///
/// # Examples
///
/// ```
/// use libhumanize::magnitude::{format_magnitude, FormatOptions, Rounding, SI_BYTES};
///
/// let options = FormatOptions::natural(2, Rounding::Floor);
/// assert_eq!(format_magnitude(1_536_000.0, &SI_BYTES, options), "1.53 MB");
/// ```
pub fn format_magnitude(quantity: f64, table: &MagnitudeTable, options: FormatOptions) -> String {
    if quantity.is_nan() {
        return "NaN".to_string();
    }
    if quantity.is_infinite() {
        return if quantity > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if quantity < 0.0 {
        return format!("-{}", format_magnitude(-quantity, table, options));
    }

    let base = f64::from(table.base);
    let max = table.max_exponent();
    let mut exponent = if quantity < base {
        0
    } else {
        ((quantity.ln() / base.ln()).floor() as usize).min(max)
    };
    // ln(base^k) / ln(base) may land just below k
    while exponent < max && table.float_multiplier(exponent + 1) <= quantity {
        exponent += 1;
    }
    while exponent > 0 && table.float_multiplier(exponent) > quantity {
        exponent -= 1;
    }

    if exponent == 0 {
        let whole = round_to(quantity, 0, options.rounding);
        return join(&format!("{whole:.0}"), table.units[0], options.space);
    }

    let value = quantity / table.float_multiplier(exponent);
    render(value, table.units[exponent], options)
}

fn render(value: f64, unit: &str, options: FormatOptions) -> String {
    let number = match options.precision {
        Precision::Adaptive => {
            let rounded = round_to(value, 1, options.rounding);
            if rounded < 10.0 {
                format!("{rounded:.1}")
            } else {
                format!("{rounded:.0}")
            }
        }
        Precision::Natural(digits) => {
            let rounded = round_to(value, digits, options.rounding);
            strip_trailing_zeros(&format!("{rounded:.digits$}")).to_string()
        }
        Precision::Fixed(digits) => {
            let rounded = round_to(value, digits, options.rounding);
            format!("{rounded:.digits$}")
        }
    };
    join(&number, unit, options.space)
}

fn join(number: &str, unit: &str, space: bool) -> String {
    if space {
        format!("{number} {unit}")
    } else {
        format!("{number}{unit}")
    }
}

/// Rounds `value` to `digits` decimals using `rounding`.
///
/// Values whose scaled form no longer fits the f64 mantissa are returned
/// unchanged.
pub(crate) fn round_to(value: f64, digits: usize, rounding: Rounding) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    let rounded = match rounding {
        Rounding::HalfUp => (scaled + 0.5).floor(),
        Rounding::Floor => scaled.floor(),
        Rounding::Ceil => scaled.ceil(),
    };
    rounded / factor
}

/// Drops trailing zeros after the decimal point, and the point itself when
/// nothing remains behind it.
pub(crate) fn strip_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Parses `"<number> <unit>"` against the given tables into an exact count.
///
/// The numeric run may contain grouping commas and at most one decimal
/// point. The unit is matched case-insensitively, with or without its
/// trailing `b`. Fractions are applied with exact integer arithmetic and
/// truncated; only the first 19 fraction digits are significant.
///
/// # Examples
///
/// ```
/// use libhumanize::magnitude::{parse_count, IEC_BYTES, SI_BYTES};
///
/// let tables = [&SI_BYTES, &IEC_BYTES];
/// assert_eq!(parse_count("42.5 MiB", &tables).unwrap(), 44_564_480);
/// assert_eq!(parse_count("1,005.03 MB", &tables).unwrap(), 1_005_030_000);
/// assert!(parse_count("84 JB", &tables).is_err());
/// ```
pub fn parse_count(text: &str, tables: &[&MagnitudeTable]) -> Result<u128> {
    let trimmed = text.trim();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(trimmed.len());
    let (number, suffix) = trimmed.split_at(end);
    let number: String = number.chars().filter(|c| *c != ',').collect();

    let (whole, fraction) = split_number(&number).inspect_err(|_| {
        debug!(input = text, "rejected numeric run");
    })?;

    let suffix = suffix.trim().to_ascii_lowercase();
    let (table, exponent) = tables
        .iter()
        .find_map(|table| table.lookup(&suffix).map(|exponent| (table, exponent)))
        .ok_or_else(|| {
            debug!(input = text, unit = %suffix, "unrecognized unit suffix");
            HumanizeError::invalid_unit(suffix.as_str())
        })?;
    let multiplier = table.multiplier(exponent).ok_or_else(|| {
        debug!(input = text, unit = %suffix, "unit multiplier overflows");
        HumanizeError::overflow(text)
    })?;
    trace!(input = text, multiplier, "matched unit suffix");

    scale(whole, fraction, multiplier).ok_or_else(|| {
        debug!(input = text, "parsed quantity overflows");
        HumanizeError::overflow(text)
    })
}

/// Splits a comma-free numeric run into its integer part and fraction digits.
fn split_number(number: &str) -> Result<(u128, &str)> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
        return Err(HumanizeError::invalid_number(number));
    }

    let whole = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|e| {
            if matches!(e.kind(), std::num::IntErrorKind::PosOverflow) {
                HumanizeError::overflow(number)
            } else {
                HumanizeError::invalid_number_with_source(number, e)
            }
        })?
    };

    let significant = &fraction[..fraction.len().min(19)];
    Ok((whole, significant))
}

/// Computes `(whole + 0.fraction) * multiplier`, truncated, without floats.
fn scale(whole: u128, fraction: &str, multiplier: u128) -> Option<u128> {
    let integral = whole.checked_mul(multiplier)?;
    if fraction.is_empty() {
        return Some(integral);
    }

    // Fraction has at most 19 digits, so every product below stays under 10^38.
    let digits: u128 = fraction.parse().ok()?;
    let denominator = 10u128.pow(fraction.len() as u32);
    let quotient = multiplier / denominator;
    let remainder = multiplier % denominator;
    let fractional = quotient * digits + remainder * digits / denominator;
    integral.checked_add(fractional)
}
