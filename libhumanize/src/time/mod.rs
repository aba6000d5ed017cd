//! Relative time phrases ("3 weeks ago") driven by a threshold table.
//!
//! A table is an ascending list of [`Magnitude`] entries. The entry used for
//! a difference is the first one whose bound is strictly greater than the
//! difference in seconds; its template is rendered with the difference
//! divided by the entry's divisor.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};


pub const SECOND: i64 = 1;
pub const MINUTE: i64 = 60;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;
pub const MONTH: i64 = 30 * DAY;
pub const YEAR: i64 = 12 * MONTH;
pub const LONG_TIME: i64 = 37 * YEAR;

/// Placeholder replaced by the count in a template.
pub const COUNT: &str = "{n}";
/// Placeholder replaced by the past or future label in a template.
pub const LABEL: &str = "{label}";

/// Rendered when a difference exceeds every bound of a table.
pub const UNDEFINED: &str = "undefined";

/// One row of a relative-time table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    /// Exclusive upper bound in seconds.
    pub bound: i64,
    /// Phrase with optional `{n}` and `{label}` placeholders.
    pub template: &'static str,
    /// Seconds per unit of `{n}`.
    pub divisor: i64,
}

impl Magnitude {
    pub const fn new(bound: i64, template: &'static str, divisor: i64) -> Self {
        Self {
            bound,
            template,
            divisor,
        }
    }

    fn count(&self, diff: i64) -> i64 {
        diff / self.divisor.max(1)
    }

    fn render(&self, diff: i64, label: &str) -> String {
        self.template
            .replace(COUNT, &self.count(diff).to_string())
            .replace(LABEL, label)
    }
}

/// English phrases from one second up to "a long while".
pub static DEFAULT_MAGNITUDES: &[Magnitude] = &[
    Magnitude::new(2 * SECOND, "1 second", SECOND),
    Magnitude::new(MINUTE, "{n} seconds", SECOND),
    Magnitude::new(2 * MINUTE, "1 minute", MINUTE),
    Magnitude::new(HOUR, "{n} minutes", MINUTE),
    Magnitude::new(2 * HOUR, "1 hour", HOUR),
    Magnitude::new(DAY, "{n} hours", HOUR),
    Magnitude::new(2 * DAY, "1 day", DAY),
    Magnitude::new(WEEK, "{n} days", DAY),
    Magnitude::new(2 * WEEK, "1 week", WEEK),
    Magnitude::new(MONTH, "{n} weeks", WEEK),
    Magnitude::new(2 * MONTH, "1 month", MONTH),
    Magnitude::new(YEAR, "{n} months", MONTH),
    Magnitude::new(18 * MONTH, "1 year", YEAR),
    Magnitude::new(2 * YEAR, "2 years", YEAR),
    Magnitude::new(LONG_TIME, "{n} years", YEAR),
    Magnitude::new(i64::MAX, "a long while", SECOND),
];

/// A configured relative-time formatter.
///
/// Bundles the table, the labels, the word used for a zero difference and
/// how many magnitudes to render, so a locale can supply all of them.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use libhumanize::time::RelativeTime;
///
/// let b = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// let a = b - Duration::days(23);
///
/// let formatter = RelativeTime::new().with_depth(2);
/// assert_eq!(formatter.format(a, b), "3 weeks, 2 days ago");
///
/// let formatter = RelativeTime::new().with_labels("earlier", "later");
/// assert_eq!(formatter.format(b, a), "3 weeks later");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTime<'a> {
    magnitudes: &'a [Magnitude],
    past_label: String,
    future_label: String,
    now_word: String,
    depth: usize,
}

impl Default for RelativeTime<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RelativeTime<'a> {
    /// English table, "ago"/"from now", one magnitude.
    pub fn new() -> Self {
        Self {
            magnitudes: DEFAULT_MAGNITUDES,
            past_label: "ago".to_string(),
            future_label: "from now".to_string(),
            now_word: "now".to_string(),
            depth: 1,
        }
    }

    /// Sets the threshold table.
    pub fn with_magnitudes(mut self, magnitudes: &'a [Magnitude]) -> Self {
        self.magnitudes = magnitudes;
        self
    }

    /// Sets the past and future labels.
    pub fn with_labels(mut self, past: impl Into<String>, future: impl Into<String>) -> Self {
        self.past_label = past.into();
        self.future_label = future.into();
        self
    }

    /// Sets the word used when both instants are equal.
    pub fn with_now_word(mut self, now: impl Into<String>) -> Self {
        self.now_word = now.into();
        self
    }

    /// Sets how many magnitudes to render. Zero is treated as one.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth.max(1);
        self
    }

    /// Returns how many magnitudes are rendered.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the threshold table.
    pub fn magnitudes(&self) -> &'a [Magnitude] {
        self.magnitudes
    }

    /// Describes the distance between `a` and `b`.
    ///
    /// The past label applies when `a` precedes `b`, the future label
    /// otherwise. Differences are measured in whole Unix seconds.
    pub fn format(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> String {
        let (mut diff, label) = if a > b {
            (a.timestamp() - b.timestamp(), self.future_label.as_str())
        } else {
            (b.timestamp() - a.timestamp(), self.past_label.as_str())
        };

        if diff == 0 {
            return self.now_word.clone();
        }

        let mut matched = Vec::with_capacity(self.depth);
        for _ in 0..self.depth {
            let index = self.magnitudes.partition_point(|m| m.bound <= diff);
            let Some(magnitude) = self.magnitudes.get(index) else {
                debug!(diff, "time difference beyond every magnitude");
                return UNDEFINED.to_string();
            };
            trace!(diff, index, template = magnitude.template, "matched magnitude");

            matched.push((magnitude, diff));
            diff %= magnitude.divisor.max(1);
            if diff <= 0 {
                break;
            }
        }

        if let [(magnitude, diff)] = matched.as_slice()
            && magnitude.template.contains(LABEL)
        {
            return magnitude.render(*diff, label);
        }

        let phrases: Vec<String> = matched
            .iter()
            .map(|(magnitude, diff)| magnitude.render(*diff, "").trim().to_string())
            .collect();
        let joined = phrases.join(", ");
        if label.is_empty() {
            joined
        } else {
            format!("{joined} {label}")
        }
    }

    /// Describes `then` relative to the current time.
    pub fn since(&self, then: DateTime<Utc>) -> String {
        self.format(then, Utc::now())
    }
}

/// Describes the distance between two instants using a custom table.
///
/// Returns `"now"` for equal instants and `"undefined"` when the difference
/// is beyond every bound of `magnitudes`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use libhumanize::time::{rel_time_magnitudes, Magnitude, DAY, HOUR};
///
/// let table = [
///     Magnitude::new(DAY, "{n}h {label}", HOUR),
///     Magnitude::new(7 * DAY, "{n}D {label}", DAY),
/// ];
/// let b = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
///
/// assert_eq!(rel_time_magnitudes(b - Duration::hours(5), b, "ago", "later", &table), "5h ago");
/// assert_eq!(rel_time_magnitudes(b - Duration::days(9), b, "ago", "later", &table), "undefined");
/// ```
pub fn rel_time_magnitudes(
    a: DateTime<Utc>,
    b: DateTime<Utc>,
    past_label: &str,
    future_label: &str,
    magnitudes: &[Magnitude],
) -> String {
    RelativeTime::new()
        .with_magnitudes(magnitudes)
        .with_labels(past_label, future_label)
        .format(a, b)
}

/// Like [`rel_time`], rendering up to `depth` magnitudes joined by commas.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use libhumanize::time::rel_time_accurate;
///
/// let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let a = b - Duration::days(23) - Duration::hours(11);
///
/// assert_eq!(rel_time_accurate(a, b, "ago", "from now", 3), "3 weeks, 2 days, 11 hours ago");
/// ```
pub fn rel_time_accurate(
    a: DateTime<Utc>,
    b: DateTime<Utc>,
    past_label: &str,
    future_label: &str,
    depth: usize,
) -> String {
    RelativeTime::new()
        .with_labels(past_label, future_label)
        .with_depth(depth)
        .format(a, b)
}

/// Describes the distance between two instants in a single magnitude.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use libhumanize::time::rel_time;
///
/// let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
///
/// assert_eq!(rel_time(b - Duration::days(1), b, "ago", "from now"), "1 day ago");
/// assert_eq!(rel_time(b, b, "ago", "from now"), "now");
/// ```
pub fn rel_time(
    a: DateTime<Utc>,
    b: DateTime<Utc>,
    past_label: &str,
    future_label: &str,
) -> String {
    rel_time_accurate(a, b, past_label, future_label, 1)
}

/// Describes `then` relative to now, e.g. `"3 weeks ago"`.
pub fn time(then: DateTime<Utc>) -> String {
    rel_time(then, Utc::now(), "ago", "from now")
}

/// Describes `then` relative to now in two magnitudes, e.g.
/// `"3 weeks, 2 days ago"`.
pub fn accurate_time(then: DateTime<Utc>) -> String {
    rel_time_accurate(then, Utc::now(), "ago", "from now", 2)
}
