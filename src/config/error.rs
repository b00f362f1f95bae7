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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Host and port do not form a socket address")]
    InvalidBindAddress,

    #[error("Invalid timeout")]
    InvalidTimeout,

    #[error("Photo body limit must be between 1 MiB and 64 MiB")]
    InvalidBodyLimit,

    #[error("Submission delay must be shorter than the request timeout")]
    SubmissionDelayExceedsRequestTimeout,

    #[error("Submission attempt lease must be longer than the submission delay")]
    AttemptLeaseTooShort,

    #[error("Geocoder URL must use http or https")]
    InvalidGeocoderUrl,

    #[error("Fallback position needs a valid latitude and longitude")]
    InvalidFallbackPosition,
}
