//! Dollar amounts abbreviated with K, M, B, T and Q suffixes.


/// Suffixes by power of a thousand, largest first.
static SCALES: [(usize, &str); 5] = [(15, "Q"), (12, "T"), (9, "B"), (6, "M"), (3, "K")];

/// Abbreviates a dollar amount to three significant digits, truncated.
///
/// Amounts below a thousand are rounded to whole dollars. Negative amounts
/// put the sign before the dollar sign.
///
/// # Examples
///
/// ```
/// use libhumanize::finance::finance;
///
/// assert_eq!(finance(2_475_260.0), "$2.47M");
/// assert_eq!(finance(24_752.0), "$24.7K");
/// assert_eq!(finance(247.0), "$247");
/// assert_eq!(finance(-2_475.0), "-$2.47K");
/// ```
pub fn finance(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let digits = format!("{:.0}", value.abs().trunc());
    let body = match SCALES.iter().find(|(zeros, _)| digits.len() > *zeros) {
        Some((zeros, suffix)) => {
            let whole = digits.len() - zeros;
            let fraction_len = 3usize.saturating_sub(whole);
            let fraction = &digits[whole..whole + fraction_len];
            if fraction.is_empty() {
                format!("{}{suffix}", &digits[..whole])
            } else {
                format!("{}.{fraction}{suffix}", &digits[..whole])
            }
        }
        None => {
            let rounded = format!("{:.0}", value.abs());
            if rounded == "1000" {
                "1.00K".to_string()
            } else {
                rounded
            }
        }
    };

    if value < 0.0 && body != "0" {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}
