//! Error types for humanize
//!
//! Every fallible formatting operation returns a [`HumanizeError`]. Nothing in
//! the library panics on bad input or signals failure with an empty string.

use thiserror::Error;


/// Main error type for humanize operations
#[derive(Error, Debug)]
pub enum HumanizeError {
    /// The input cannot be formatted (negative byte count, NaN, malformed
    /// date string or format pattern)
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The value is well formed but lies outside every supported bucket,
    /// or a calendar computation leaves the representable range
    #[error("Unrepresentable value: {message}")]
    Unrepresentable { message: String },

    /// The call does not determine a single output (e.g. clamp with no bound)
    #[error("Ambiguous fallback: {message}")]
    AmbiguousFallback { message: String },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for humanize operations
pub type Result<T> = std::result::Result<T, HumanizeError>;

impl HumanizeError {
    /// Creates a new invalid input error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    ///
    /// let err = HumanizeError::invalid_input("byte count must not be negative");
    /// assert!(matches!(err, HumanizeError::InvalidInput { .. }));
    /// ```
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new invalid input error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::InvalidData, "bad timestamp");
    /// let err = HumanizeError::invalid_input_with_source("cannot parse date", io_err);
    /// assert!(matches!(err, HumanizeError::InvalidInput { .. }));
    /// ```
    pub fn invalid_input_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidInput {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new unrepresentable value error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    ///
    /// let err = HumanizeError::unrepresentable("value is a googol or more");
    /// assert!(matches!(err, HumanizeError::Unrepresentable { .. }));
    /// ```
    pub fn unrepresentable<S: Into<String>>(message: S) -> Self {
        Self::Unrepresentable {
            message: message.into(),
        }
    }

    /// Creates a new ambiguous fallback error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    ///
    /// let err = HumanizeError::ambiguous_fallback("clamp needs a floor or a ceiling");
    /// assert!(matches!(err, HumanizeError::AmbiguousFallback { .. }));
    /// ```
    pub fn ambiguous_fallback<S: Into<String>>(message: S) -> Self {
        Self::AmbiguousFallback {
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
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::error::HumanizeError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = HumanizeError::config_with_source("failed to read config", Some("/path/to/config.yaml"), io_err);
    /// assert!(matches!(err, HumanizeError::Config { .. }));
    /// ```
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
