//! Location configuration (geolocation and reverse geocoding)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::geocoding::NominatimConfig;
use crate::domain::location::Coordinates;
use crate::ports::GeolocationOptions;

/// Location configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Request the most accurate fix available
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,

    /// Bound on position acquisition, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Oldest acceptable cached fix, in milliseconds
    #[serde(default = "default_max_cache_age_ms")]
    pub max_cache_age_ms: u64,

    /// Reverse geocoder root URL
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    /// Bound on a reverse lookup, in milliseconds
    #[serde(default = "default_geocoder_timeout_ms")]
    pub geocoder_timeout_ms: u64,

    /// Reverse lookup detail level
    #[serde(default = "default_geocoder_zoom")]
    pub geocoder_zoom: u8,

    /// User agent sent to the geocoder
    pub geocoder_user_agent: Option<String>,

    /// Fallback position used when a request carries none
    pub fallback_latitude: Option<f64>,
    pub fallback_longitude: Option<f64>,
}

impl LocationConfig {
    pub fn geolocation_options(&self) -> GeolocationOptions {
        GeolocationOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_millis(self.timeout_ms),
            max_cache_age: Duration::from_millis(self.max_cache_age_ms),
        }
    }

    pub fn nominatim_config(&self) -> NominatimConfig {
        let config = NominatimConfig::default()
            .with_base_url(self.geocoder_url.clone())
            .with_timeout(Duration::from_millis(self.geocoder_timeout_ms))
            .with_zoom(self.geocoder_zoom);
        match &self.geocoder_user_agent {
            Some(agent) => config.with_user_agent(agent.clone()),
            None => config,
        }
    }

    /// Configured fallback position, if both coordinates are set.
    pub fn fallback_position(&self) -> Result<Option<Coordinates>, ValidationError> {
        match (self.fallback_latitude, self.fallback_longitude) {
            (Some(lat), Some(lng)) => Coordinates::new(lat, lng)
                .map(Some)
                .map_err(|_| ValidationError::InvalidFallbackPosition),
            (None, None) => Ok(None),
            _ => Err(ValidationError::InvalidFallbackPosition),
        }
    }

    /// Validate location configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_ms == 0 || self.timeout_ms > 60_000 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.geocoder_timeout_ms == 0 || self.geocoder_timeout_ms > 60_000 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !(self.geocoder_url.starts_with("http://") || self.geocoder_url.starts_with("https://"))
        {
            return Err(ValidationError::InvalidGeocoderUrl);
        }
        self.fallback_position()?;
        Ok(())
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            high_accuracy: default_high_accuracy(),
            timeout_ms: default_timeout_ms(),
            max_cache_age_ms: default_max_cache_age_ms(),
            geocoder_url: default_geocoder_url(),
            geocoder_timeout_ms: default_geocoder_timeout_ms(),
            geocoder_zoom: default_geocoder_zoom(),
            geocoder_user_agent: None,
            fallback_latitude: None,
            fallback_longitude: None,
        }
    }
}

fn default_high_accuracy() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_cache_age_ms() -> u64 {
    300_000
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_geocoder_timeout_ms() -> u64 {
    5_000
}

fn default_geocoder_zoom() -> u8 {
    12
}
