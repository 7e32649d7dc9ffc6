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
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid session idle timeout")]
    InvalidIdleTimeout,

    #[error("Simulation delay {name} exceeds {max_ms} ms")]
    DelayTooLong { name: &'static str, max_ms: u64 },

    #[error("Order tracker tick must be greater than zero")]
    InvalidOrderTick,

    #[error("Carousel rotation period must be greater than zero")]
    InvalidRotationPeriod,
}
