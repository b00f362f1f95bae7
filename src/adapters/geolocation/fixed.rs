//! Fixed-position geolocation.
//!
//! Answers every request with one configured position, or with
//! `CapabilityAbsent` when none is configured. Used as the server-side
//! fallback and in tests, where the delay simulates a slow device.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::Timestamp;
use crate::domain::location::{Coordinates, LocationFailure};
use crate::ports::{GeolocationProvider, PositionFix, PositionRequest};

#[derive(Debug, Clone, Default)]
pub struct FixedGeolocationProvider {
    position: Option<Coordinates>,
    delay: Duration,
}

impl FixedGeolocationProvider {
    /// Provider for a device with no positioning capability.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn at(position: Coordinates) -> Self {
        Self {
            position: Some(position),
            delay: Duration::ZERO,
        }
    }

    pub fn from_option(position: Option<Coordinates>) -> Self {
        Self {
            position,
            delay: Duration::ZERO,
        }
    }

    /// Simulated acquisition latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocationProvider {
    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> Result<PositionFix, LocationFailure> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.position
            .map(|coordinates| PositionFix {
                coordinates,
                captured_at: Timestamp::now(),
            })
            .ok_or(LocationFailure::CapabilityAbsent)
    }
}
