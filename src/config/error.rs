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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Major period count must be between 1 and 12")]
    InvalidPeriodCount,

    #[error("Batch size must be between 1 and 1024")]
    InvalidBatchSize,

    #[error("Log level directive must not be empty")]
    EmptyLogLevel,
}
