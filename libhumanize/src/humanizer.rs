//! High-level API for the libhumanize library.
//!
//! The free functions in each module are stateless and use English defaults.
//! A [`Humanizer`] carries a [`Config`] instead, so the locale, byte units,
//! time labels and default currency are chosen once and applied to every
//! call.
//!
//! # Examples
//!
//! ```
//! use libhumanize::{Humanizer, Locale};
//!
//! let h = Humanizer::builder().with_locale(Locale::Turkish).build().unwrap();
//! assert_eq!(h.ordinal(3), "3.");
//! assert_eq!(h.bytes(82_854_982), "83 MB");
//! ```

use crate::bytes::parse_bytes;
use crate::config::Config;
use crate::currency::{Amount, currency};
use crate::error::Result;
use crate::locale::Locale;
use crate::magnitude::format_count;
use crate::time::RelativeTime;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::debug;

/// Formatter bound to a configuration.
///
/// # Examples
///
/// ## Defaults
///
/// ```
/// use libhumanize::Humanizer;
///
/// let h = Humanizer::new();
/// assert_eq!(h.bytes(1000), "1.0 kB");
/// assert_eq!(h.currency(1234.5), "$ 1,234.50");
/// ```
///
/// ## From YAML
///
/// ```
/// use libhumanize::{Config, Humanizer};
///
/// let config = Config::from_yaml_str("bytes: { units: iec }\ncurrency: { default_code: EUR }").unwrap();
/// let h = Humanizer::builder().with_config(config).build().unwrap();
///
/// assert_eq!(h.bytes(1024), "1.0 KiB");
/// assert_eq!(h.currency(50000), "€ 50,000.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Humanizer {
    config: Config,
}

impl Humanizer {
    /// Creates a humanizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a custom configuration.
    pub fn builder() -> HumanizerBuilder {
        HumanizerBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Formats a byte count with the configured units, precision and rounding.
    pub fn bytes(&self, count: u64) -> String {
        format_count(
            u128::from(count),
            self.config.bytes.table(),
            self.config.bytes.options(),
        )
    }

    /// Parses a byte quantity in either SI or IEC units.
    pub fn parse_bytes(&self, text: &str) -> Result<u64> {
        parse_bytes(text)
    }

    /// Returns the relative-time formatter for this configuration.
    ///
    /// Labels set in the configuration override the locale's labels.
    pub fn relative_time(&self) -> RelativeTime<'static> {
        let locale = self.locale();
        let time = &self.config.time;
        let past = time.past_label.as_deref().unwrap_or(locale.past_label());
        let future = time.future_label.as_deref().unwrap_or(locale.future_label());
        locale
            .relative_time()
            .with_labels(past, future)
            .with_depth(time.depth)
    }

    /// Describes `then` relative to now.
    pub fn time(&self, then: DateTime<Utc>) -> String {
        self.relative_time().since(then)
    }

    /// Describes the distance between two instants.
    pub fn rel_time(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> String {
        self.relative_time().format(a, b)
    }

    /// Formats an ordinal in the configured locale.
    pub fn ordinal<N: Into<i128> + Copy>(&self, value: N) -> String {
        self.locale().ordinal(value)
    }

    /// Formats an amount in the configured default currency.
    pub fn currency<'a>(&self, amount: impl Into<Amount<'a>>) -> String {
        currency(amount, &self.config.currency.default_code)
    }

    /// Formats an amount in the given currency.
    pub fn currency_in<'a>(&self, amount: impl Into<Amount<'a>>, code: &str) -> String {
        currency(amount, code)
    }
}

/// Builder for creating a [`Humanizer`].
#[derive(Debug, Clone, Default)]
pub struct HumanizerBuilder {
    config: Option<Config>,
    config_file: Option<PathBuf>,
    locale: Option<Locale>,
}

impl HumanizerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration directly.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a YAML file when building.
    ///
    /// Takes precedence over [`with_config`](Self::with_config).
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the configured locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Build the `Humanizer` instance.
    ///
    /// Fails only when a configuration file was given and cannot be loaded.
    pub fn build(self) -> Result<Humanizer> {
        let mut config = match self.config_file {
            Some(path) => Config::load(Some(&path))?,
            None => self.config.unwrap_or_default(),
        };

        if let Some(locale) = self.locale {
            config.locale = locale;
        }

        debug!(locale = %config.locale, "built humanizer");
        Ok(Humanizer { config })
    }
}
