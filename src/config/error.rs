//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Invalid URL for {0}")]
    InvalidUrl(&'static str),

    #[error("Value must not be empty: {0}")]
    EmptyValue(&'static str),

    #[error("Value must be greater than zero: {0}")]
    ZeroValue(&'static str),

    #[error("max_retries must be at most {max}, got {value}")]
    TooManyRetries { value: u32, max: u32 },
}
