//! Reverse geocoder port.
//!
//! Turns coordinates into address parts for the place name shown on the
//! selection and review screens.

use async_trait::async_trait;

use crate::domain::location::{Coordinates, PlaceAddress};

/// Errors from a reverse lookup. None of them fail the location probe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodingError {
    #[error("geocoder request failed: {0}")]
    Network(String),

    #[error("geocoder timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("geocoder returned an unreadable response: {0}")]
    Parse(String),
}

/// Port for coordinate to address lookups.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Looks up the address around `coordinates`.
    ///
    /// Missing address parts are returned as `None`, not as an error.
    async fn lookup(&self, coordinates: &Coordinates) -> Result<PlaceAddress, GeocodingError>;
}
