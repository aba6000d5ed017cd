//! Per-language vocabulary for relative time and ordinals.
//!
//! A [`Locale`] is a plain value. Pass it to the functions that need it or
//! hold it in a [`crate::Humanizer`]; nothing here is process-wide.

use crate::error::{HumanizeError, Result};
use crate::ordinal::ordinal;
use crate::time::{
    DAY, DEFAULT_MAGNITUDES, HOUR, LONG_TIME, MINUTE, MONTH, Magnitude, RelativeTime, SECOND,
    WEEK, YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Turkish phrases from one second up to "uzun zaman".
pub static TURKISH_MAGNITUDES: &[Magnitude] = &[
    Magnitude::new(2 * SECOND, "1 saniye", SECOND),
    Magnitude::new(MINUTE, "{n} saniye", SECOND),
    Magnitude::new(2 * MINUTE, "1 dakika", MINUTE),
    Magnitude::new(HOUR, "{n} dakika", MINUTE),
    Magnitude::new(2 * HOUR, "1 saat", HOUR),
    Magnitude::new(DAY, "{n} saat", HOUR),
    Magnitude::new(2 * DAY, "1 gün", DAY),
    Magnitude::new(WEEK, "{n} gün", DAY),
    Magnitude::new(2 * WEEK, "1 hafta", WEEK),
    Magnitude::new(MONTH, "{n} hafta", WEEK),
    Magnitude::new(2 * MONTH, "1 ay", MONTH),
    Magnitude::new(YEAR, "{n} ay", MONTH),
    Magnitude::new(18 * MONTH, "1 yıl", YEAR),
    Magnitude::new(2 * YEAR, "2 yıl", YEAR),
    Magnitude::new(LONG_TIME, "{n} yıl", YEAR),
    Magnitude::new(i64::MAX, "uzun zaman", SECOND),
];

/// A supported language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en_US", alias = "en")]
    English,
    #[serde(rename = "tr_TR", alias = "tr")]
    Turkish,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Turkish];

    /// Returns the POSIX-style locale code, e.g. `"en_US"`.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en_US",
            Locale::Turkish => "tr_TR",
        }
    }

    pub fn now_word(&self) -> &'static str {
        match self {
            Locale::English => "now",
            Locale::Turkish => "şimdi",
        }
    }

    pub fn past_label(&self) -> &'static str {
        match self {
            Locale::English => "ago",
            Locale::Turkish => "önce",
        }
    }

    pub fn future_label(&self) -> &'static str {
        match self {
            Locale::English => "from now",
            Locale::Turkish => "sonra",
        }
    }

    pub fn magnitudes(&self) -> &'static [Magnitude] {
        match self {
            Locale::English => DEFAULT_MAGNITUDES,
            Locale::Turkish => TURKISH_MAGNITUDES,
        }
    }

    /// Returns a relative-time formatter using this locale's vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use libhumanize::Locale;
    ///
    /// let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let formatter = Locale::Turkish.relative_time();
    ///
    /// assert_eq!(formatter.format(b - Duration::days(3), b), "3 gün önce");
    /// assert_eq!(formatter.format(b, b), "şimdi");
    /// ```
    pub fn relative_time(&self) -> RelativeTime<'static> {
        RelativeTime::new()
            .with_magnitudes(self.magnitudes())
            .with_labels(self.past_label(), self.future_label())
            .with_now_word(self.now_word())
    }

    /// Formats an ordinal in this locale: `"3rd"` in English, `"3."` in
    /// Turkish.
    pub fn ordinal<N: Into<i128> + Copy>(&self, value: N) -> String {
        match self {
            Locale::English => ordinal(value),
            Locale::Turkish => format!("{}.", value.into()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = HumanizeError;

    /// Accepts `en_US`/`en` and `tr_TR`/`tr`, ignoring case and treating
    /// `-` like `_`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('-', "_").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en_us" => Ok(Locale::English),
            "tr" | "tr_tr" => Ok(Locale::Turkish),
            _ => Err(HumanizeError::config(
                format!("unsupported locale: {s:?}"),
                None,
            )),
        }
    }
}
