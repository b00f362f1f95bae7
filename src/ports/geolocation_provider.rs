//! Geolocation provider port.
//!
//! Supplies the reporter's current position. The wizard never talks to a
//! positioning source directly; it asks this port and applies the answer
//! through the location probe.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::Timestamp;
use crate::domain::location::{Coordinates, LocationFailure};

/// Accuracy and freshness requirements for one position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub high_accuracy: bool,
    /// Upper bound on how long acquisition may take.
    pub timeout: Duration,
    /// Oldest cached fix that may still be returned.
    pub max_cache_age: Duration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(10_000),
            max_cache_age: Duration::from_millis(300_000),
        }
    }
}

/// A raw position, before any place-name lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub coordinates: Coordinates,
    pub captured_at: Timestamp,
}

/// What the reporter's device sent along with the request, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportedPosition {
    Fix {
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        captured_at: Option<Timestamp>,
    },
    Error { error: LocationFailure },
}

/// A position request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionRequest {
    pub options: GeolocationOptions,
    pub reported: Option<ReportedPosition>,
}

impl PositionRequest {
    pub fn new(options: GeolocationOptions) -> Self {
        Self {
            options,
            reported: None,
        }
    }

    pub fn with_reported(mut self, reported: ReportedPosition) -> Self {
        self.reported = Some(reported);
        self
    }
}

/// Port for acquiring the reporter's position.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Resolves the current position.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` if the reporter refused location access
    /// - `CapabilityAbsent` if no positioning source is available
    /// - `Timeout` if no fresh fix could be obtained in time
    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> Result<PositionFix, LocationFailure>;
}
