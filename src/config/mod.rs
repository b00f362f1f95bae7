//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COASTAL_SENTINEL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use coastal_sentinel::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod location;
mod server;
mod submission;

pub use error::{ConfigError, ValidationError};
pub use location::LocationConfig;
pub use server::{Environment, ServerConfig};
pub use submission::SubmissionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Geolocation and reverse geocoding
    #[serde(default)]
    pub location: LocationConfig,

    /// Report submission
    #[serde(default)]
    pub submission: SubmissionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COASTAL_SENTINEL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COASTAL_SENTINEL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `COASTAL_SENTINEL__LOCATION__TIMEOUT_MS=5000` -> `location.timeout_ms = 5000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COASTAL_SENTINEL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.location.validate()?;
        self.submission.validate()?;
        if self.submission.delay() >= self.server.request_timeout() {
            return Err(ValidationError::SubmissionDelayExceedsRequestTimeout);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
