//! Breakdowns of `std::time::Duration` into calendar-ish units.

use std::time::Duration;


const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// The format used by [`duration_with_format`] when given an empty string.
pub const DEFAULT_FORMAT: &str = "%y %m %w %d %H %M %S";

/// Flags in the order they consume the duration.
static FLAGS: [(&str, u64, &str); 7] = [
    ("%y", YEAR, "year"),
    ("%m", MONTH, "month"),
    ("%w", WEEK, "week"),
    ("%d", DAY, "day"),
    ("%H", HOUR, "hour"),
    ("%M", MINUTE, "minute"),
    ("%S", 1, "second"),
];

/// Breaks a duration down following a format of `%y %m %w %d %H %M %S`
/// flags.
///
/// Flags missing from the format leave their share of the duration to the
/// next smaller flag. Zero segments are dropped. Sub-second precision is
/// ignored.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use libhumanize::duration::duration_with_format;
///
/// let d = Duration::from_secs(15 * 24 * 3600);
/// assert_eq!(duration_with_format("%w %H", d), "2 weeks 24 hours");
/// ```
pub fn duration_with_format(format: &str, duration: Duration) -> String {
    let mut out = if format.is_empty() {
        DEFAULT_FORMAT.to_string()
    } else {
        format.to_string()
    };
    let mut remaining = duration.as_secs();

    for (flag, unit, name) in FLAGS {
        if out.contains(flag) {
            let count = remaining / unit;
            remaining %= unit;
            out = out.replace(flag, &pluralize(count, name));
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn pluralize(count: u64, name: &str) -> String {
    match count {
        0 => String::new(),
        1 => format!("1 {name}"),
        _ => format!("{count} {name}s"),
    }
}

/// Renders a duration in its single largest unit, from nanoseconds up to
/// hours.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use libhumanize::duration::duration;
///
/// assert_eq!(duration(Duration::from_millis(999)), "999 milliseconds");
/// assert_eq!(duration(Duration::from_secs(3600)), "1 hour");
/// ```
pub fn duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    let (count, name) = if nanos < 1_000 {
        (nanos, "nanosecond")
    } else if nanos < 1_000_000 {
        (nanos / 1_000, "microsecond")
    } else if nanos < 1_000_000_000 {
        (nanos / 1_000_000, "millisecond")
    } else {
        let secs = u128::from(duration.as_secs());
        if secs < u128::from(MINUTE) {
            (secs, "second")
        } else if secs < u128::from(HOUR) {
            (secs / u128::from(MINUTE), "minute")
        } else {
            (secs / u128::from(HOUR), "hour")
        }
    };

    if count == 1 {
        format!("1 {name}")
    } else {
        format!("{count} {name}s")
    }
}
