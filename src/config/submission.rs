//! Submission configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Submission configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Simulated delivery latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// How long an unanswered delivery attempt blocks a retry, in milliseconds
    #[serde(default = "default_attempt_lease_ms")]
    pub attempt_lease_ms: u64,

    /// Seed the report store with sample reports at startup
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

impl SubmissionConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn attempt_lease(&self) -> Duration {
        Duration::from_millis(self.attempt_lease_ms)
    }

    /// Validate submission configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.delay_ms > 30_000 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.attempt_lease_ms <= self.delay_ms {
            return Err(ValidationError::AttemptLeaseTooShort);
        }
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            attempt_lease_ms: default_attempt_lease_ms(),
            seed_samples: default_seed_samples(),
        }
    }
}

fn default_delay_ms() -> u64 {
    1_000
}

fn default_attempt_lease_ms() -> u64 {
    60_000
}

fn default_seed_samples() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_one_second() {
        let config = SubmissionConfig::default();
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert!(config.seed_samples);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lease_must_outlast_the_delay() {
        let config = SubmissionConfig {
            delay_ms: 5_000,
            attempt_lease_ms: 5_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::AttemptLeaseTooShort)
        ));
        assert_eq!(SubmissionConfig::default().attempt_lease(), Duration::from_secs(60));
    }

    #[test]
    fn excessive_delay_is_rejected() {
        let config = SubmissionConfig {
            delay_ms: 60_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
