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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Rate limit window for '{0}' must be positive")]
    InvalidRateLimitWindow(String),

    #[error("Bootstrap {0} is invalid")]
    InvalidBootstrap(&'static str),

    #[error("Bootstrap admin is not allowed in production")]
    BootstrapInProduction,
}
