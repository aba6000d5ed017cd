//! Humanizer configuration.
//!
//! This module manages the settings a [`crate::Humanizer`] formats with:
//! sensible defaults, optionally overridden by a YAML file or string.

use crate::error::{HumanizeError, Result};
use crate::locale::Locale;
use crate::magnitude::{FormatOptions, IEC_BYTES, MagnitudeTable, Precision, Rounding, SI_BYTES};
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub bytes: BytesConfig,
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
}

impl Config {
    /// Parses a `Config` from a YAML string layered over the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            .add_source(Self::defaults()?)
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional YAML file path.
    ///
    /// Without a path the defaults are returned. A path that does not exist
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder().add_source(Self::defaults()?);

        if let Some(p) = path {
            debug!(path = %p.display(), "loading configuration file");
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        } else {
            debug!("no configuration file, using defaults");
        }

        Self::from_builder(builder, path)
    }

    fn defaults() -> Result<ConfigRs> {
        ConfigRs::try_from(&Config::default()).map_err(|e| {
            HumanizeError::config_with_source("Failed to serialize default configuration", None, e)
        })
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                HumanizeError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path.map(|p| p.display().to_string()),
                    e,
                )
            })
    }
}

/// Which byte magnitudes to use.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Powers of 1000: kB, MB, GB.
    #[default]
    Si,
    /// Powers of 1024: KiB, MiB, GiB.
    Iec,
}

/// Byte formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BytesConfig {
    #[serde(default)]
    pub units: UnitSystem,

    /// Decimals to keep. Unset means one decimal below 10 and none above.
    #[serde(default)]
    pub precision: Option<usize>,

    #[serde(default)]
    pub rounding: Rounding,
}

impl BytesConfig {
    pub fn table(&self) -> &'static MagnitudeTable {
        match self.units {
            UnitSystem::Si => &SI_BYTES,
            UnitSystem::Iec => &IEC_BYTES,
        }
    }

    pub fn options(&self) -> FormatOptions {
        let precision = match self.precision {
            Some(digits) => Precision::Natural(digits),
            None => Precision::Adaptive,
        };
        FormatOptions {
            precision,
            rounding: self.rounding,
            ..FormatOptions::default()
        }
    }
}

/// Relative time settings.
///
/// Unset labels fall back to the locale's vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeConfig {
    #[serde(default)]
    pub past_label: Option<String>,

    #[serde(default)]
    pub future_label: Option<String>,

    #[serde(default = "default_time_depth")]
    pub depth: usize,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            past_label: None,
            future_label: None,
            depth: default_time_depth(),
        }
    }
}

fn default_time_depth() -> usize {
    1
}

/// Currency settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyConfig {
    #[serde(default = "default_currency_code")]
    pub default_code: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            default_code: default_currency_code(),
        }
    }
}

fn default_currency_code() -> String {
    "USD".to_string()
}
