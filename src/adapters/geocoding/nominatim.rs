//! Nominatim reverse geocoder.
//!
//! Calls `GET {base_url}/reverse?format=json&lat=..&lon=..&zoom=..` and reads
//! the `address` object of the response.
//!
//! # Configuration
//!
//! ```ignore
//! let config = NominatimConfig::default()
//!     .with_base_url("https://nominatim.openstreetmap.org")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let geocoder = NominatimGeocoder::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::location::{Coordinates, PlaceAddress};
use crate::ports::{GeocodingError, ReverseGeocoder};

/// Configuration for the Nominatim geocoder.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Service root, without a trailing slash.
    pub base_url: String,
    /// Address detail level; 12 is town level.
    pub zoom: u8,
    /// Bound on the whole lookup.
    pub timeout: Duration,
    /// Nominatim's usage policy requires an identifying agent.
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            zoom: 12,
            timeout: Duration::from_secs(5),
            user_agent: concat!("coastal-sentinel/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl NominatimConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Reverse geocoder backed by a Nominatim instance.
pub struct NominatimGeocoder {
    config: NominatimConfig,
    client: Client,
}

impl NominatimGeocoder {
    /// Creates a geocoder with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Network` if the HTTP client cannot be constructed
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn reverse_url(&self) -> String {
        format!("{}/reverse", self.config.base_url)
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: PlaceAddress,
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn lookup(&self, coordinates: &Coordinates) -> Result<PlaceAddress, GeocodingError> {
        let query = [
            ("format", "json".to_string()),
            ("lat", coordinates.latitude().to_string()),
            ("lon", coordinates.longitude().to_string()),
            ("zoom", self.config.zoom.to_string()),
        ];

        let response = self
            .client
            .get(self.reverse_url())
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_ms: self.timeout_ms(),
                    }
                } else {
                    GeocodingError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Reverse geocoder returned {}", status);
            return Err(GeocodingError::Network(format!("HTTP {}", status)));
        }

        let body: ReverseResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Timeout {
                    timeout_ms: self.timeout_ms(),
                }
            } else {
                GeocodingError::Parse(e.to_string())
            }
        })?;

        tracing::debug!(address = ?body.address, "Reverse geocoder resolved address");
        Ok(body.address)
    }
}
