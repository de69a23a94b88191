//! # Error Types
//!
//! ## Overview
//!
//! Submission itself never fails: every branch that cannot submit simply does nothing. The errors
//! here cover the fallible edges around it, which are parsing configuration and compiling
//! platform detection rules.

/// Errors returned while reading configuration.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// An option was given a value it doesn't recognize.
    #[error("Invalid value for {option}: {value:?}")]
    InvalidValue {
        /// The option being parsed.
        option: &'static str,

        /// The rejected value.
        value: String,
    },

    /// Failure while decoding a JSON configuration.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(option: &'static str, value: &str) -> Self {
        ConfigError::InvalidValue { option, value: value.to_string() }
    }
}

/// Errors returned while building platform detection rules.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DetectError {
    /// Failure due to a bad regular expression.
    #[error("Invalid user agent pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Common result type for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;
