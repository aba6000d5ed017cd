//! English ordinal suffixes.

use crate::grouping::comma;


/// Returns the English suffix for `value`, taken from its absolute value.
pub fn suffix<N: Into<i128>>(value: N) -> &'static str {
    let n = value.into().unsigned_abs();
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Formats a number as an ordinal.
///
/// # Examples
///
/// ```
/// use libhumanize::ordinal::ordinal;
///
/// assert_eq!(ordinal(3), "3rd");
/// assert_eq!(ordinal(11), "11th");
/// assert_eq!(ordinal(21), "21st");
/// ```
pub fn ordinal<N: Into<i128> + Copy>(value: N) -> String {
    format!("{}{}", value.into(), suffix(value))
}

/// Formats a number as an ordinal with grouping commas.
///
/// # Examples
///
/// ```
/// use libhumanize::ordinal::ordinal_comma;
///
/// assert_eq!(ordinal_comma(834143), "834,143rd");
/// ```
pub fn ordinal_comma<N: Into<i128> + Copy>(value: N) -> String {
    format!("{}{}", comma(value), suffix(value))
}
