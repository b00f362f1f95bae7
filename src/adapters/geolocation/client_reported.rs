//! Client-reported geolocation.
//!
//! The reporter's device acquires its own position and posts either the fix
//! or the failure it saw. This adapter checks the fix for freshness and
//! falls back to another provider when the device sent nothing.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::location::{Coordinates, LocationFailure};
use crate::ports::{GeolocationProvider, PositionFix, PositionRequest, ReportedPosition};

/// Provider that trusts the position reported with the request.
#[derive(Clone, Default)]
pub struct ClientGeolocationProvider {
    fallback: Option<Arc<dyn GeolocationProvider>>,
}

impl ClientGeolocationProvider {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    /// Provider consulted when the request carries no reported position.
    pub fn with_fallback(mut self, fallback: Arc<dyn GeolocationProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

#[async_trait]
impl GeolocationProvider for ClientGeolocationProvider {
    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> Result<PositionFix, LocationFailure> {
        match request.reported {
            Some(ReportedPosition::Fix {
                latitude,
                longitude,
                captured_at,
            }) => {
                let coordinates = Coordinates::new(latitude, longitude).map_err(|e| {
                    tracing::warn!("Rejected reported position: {}", e);
                    LocationFailure::CapabilityAbsent
                })?;

                let now = Timestamp::now();
                let captured_at = captured_at.unwrap_or(now);
                let age = now.duration_since(&captured_at);
                let too_old = chrono::Duration::from_std(request.options.max_cache_age)
                    .map(|max_age| age > max_age)
                    .unwrap_or(false);
                if too_old {
                    tracing::debug!(
                        age_ms = age.num_milliseconds(),
                        "Reported position is older than the cache limit"
                    );
                    return Err(LocationFailure::Timeout);
                }

                Ok(PositionFix {
                    coordinates,
                    captured_at,
                })
            }
            Some(ReportedPosition::Error { error }) => Err(error),
            None => match &self.fallback {
                Some(fallback) => fallback.current_position(request).await,
                None => Err(LocationFailure::CapabilityAbsent),
            },
        }
    }
}
