//! Error types for libhumanize
//!
//! Formatting never fails; only the parsers, the float format directives and
//! the configuration loader return errors. Every error maps onto one of the
//! coarse [`ErrorKind`] categories.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Coarse classification of a [`HumanizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed numeric text, unknown unit suffix or bad format directive.
    Parse,
    /// The result does not fit the requested numeric type.
    Range,
    /// Configuration could not be loaded or deserialized.
    Config,
}

/// Main error type for libhumanize operations
#[derive(Error, Debug)]
pub enum HumanizeError {
    /// The leading numeric run could not be parsed
    #[error("Invalid number: {input:?}")]
    InvalidNumber {
        input: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The unit suffix is not in any known magnitude table
    #[error("Unhandled size name: {unit:?}")]
    InvalidUnit { unit: String },

    /// The scaled value exceeds the representable range
    #[error("Too large: {input:?}")]
    Overflow { input: String },

    /// A float format directive is malformed
    #[error("Invalid format {format:?}: {message}")]
    InvalidFormat { format: String, message: String },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for libhumanize operations
pub type Result<T> = std::result::Result<T, HumanizeError>;

impl HumanizeError {
    /// Returns the coarse category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::{ErrorKind, HumanizeError};
    ///
    /// assert_eq!(HumanizeError::overflow("16 EiB").kind(), ErrorKind::Range);
    /// assert_eq!(HumanizeError::invalid_unit("jb").kind(), ErrorKind::Parse);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumber { .. } | Self::InvalidUnit { .. } | Self::InvalidFormat { .. } => {
                ErrorKind::Parse
            }
            Self::Overflow { .. } => ErrorKind::Range,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    /// Creates a new invalid number error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    ///
    /// let err = HumanizeError::invalid_number("1.2.3");
    /// assert!(matches!(err, HumanizeError::InvalidNumber { .. }));
    /// ```
    pub fn invalid_number<S: Into<String>>(input: S) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            source: None,
        }
    }

    /// Creates a new invalid number error with a source error.
    pub fn invalid_number_with_source<S, E>(input: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidNumber {
            input: input.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid unit error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    ///
    /// let err = HumanizeError::invalid_unit("jb");
    /// assert!(err.to_string().contains("jb"));
    /// ```
    pub fn invalid_unit<S: Into<String>>(unit: S) -> Self {
        Self::InvalidUnit { unit: unit.into() }
    }

    /// Creates a new overflow error.
    pub fn overflow<S: Into<String>>(input: S) -> Self {
        Self::Overflow {
            input: input.into(),
        }
    }

    /// Creates a new invalid format error.
    pub fn invalid_format<S: Into<String>, M: Into<String>>(format: S, message: M) -> Self {
        Self::InvalidFormat {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    ///
    /// let err = HumanizeError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, HumanizeError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}
