//! libhumanize - Human-readable numbers, sizes and times
//!
//! libhumanize turns raw numeric and temporal values into strings people can
//! read at a glance, and parses some of them back.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{Duration, Utc};
//! use libhumanize::{bytes, comma, ordinal, parse_bytes, time};
//!
//! assert_eq!(bytes(82_854_982), "83 MB");
//! assert_eq!(parse_bytes("42 MB").unwrap(), 42_000_000);
//! assert_eq!(comma(834_142), "834,142");
//! assert_eq!(ordinal(21), "21st");
//! assert_eq!(time(Utc::now() - Duration::days(3)), "3 days ago");
//! ```
//!
//! # Features
//!
//! - **Sizes**: SI and IEC byte and bit units, with floor/ceil precision and a
//!   parser that accepts `"5.5 GiB"`, `"1,024 kb"` or `"7m"`
//! - **Relative time**: table-driven phrases, one or several magnitudes deep
//! - **Grouping**: Western and Indian digit grouping, currency formatting for
//!   over forty currencies
//! - **Numbers**: ordinals, SI prefixes, float directives, finance
//!   abbreviations, durations
//! - **Locales**: English and Turkish vocabulary passed as values, never as
//!   global state
//!
//! # Main Types
//!
//! - [`Humanizer`] - Formatter bound to a [`Config`] and [`Locale`]
//! - [`HumanizerBuilder`] - Builder for a custom configuration
//! - [`RelativeTime`] - Configurable relative-time formatter
//! - [`HumanizeError`] - Error returned by the parsers and the config loader

#![warn(clippy::all)]

/// Returns the libhumanize crate version.
///
/// # Examples
///
/// ```
/// let version = libhumanize::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod humanizer;
pub use humanizer::{Humanizer, HumanizerBuilder};

// Re-export commonly used types and functions for convenience
pub use boolean::yes_no;
pub use bytes::{
    big_bytes, big_ibytes, bits, bytes, bytes_custom_ceil, bytes_custom_floor, ibits, ibytes,
    ibytes_custom_ceil, ibytes_custom_floor, parse_big_bytes, parse_bits, parse_bytes,
};
pub use config::Config;
pub use currency::{Amount, CurrencyFormat, currency, currency_with_name};
pub use duration::{duration, duration_with_format};
pub use error::{ErrorKind, HumanizeError, Result};
pub use finance::finance;
pub use grouping::{GroupingStyle, comma, comma_str, commaf, commaf_with_digits};
pub use locale::Locale;
pub use number::{format_float, ftoa, ftoa_with_digits};
pub use ordinal::{ordinal, ordinal_comma};
pub use si::{compute_si, parse_si, si};
pub use time::{RelativeTime, accurate_time, rel_time, rel_time_accurate, rel_time_magnitudes, time};

pub mod boolean;
pub mod bytes;
pub mod config;
pub mod currency;
pub mod duration;
pub mod error;
pub mod finance;
pub mod grouping;
pub mod locale;
pub mod number;
pub mod ordinal;
pub mod si;
pub mod time;

// Shared table-driven algorithm (hidden from docs but still public)
#[doc(hidden)]
pub mod magnitude;
