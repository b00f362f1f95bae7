//! Geographic coordinate value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 position. Serialized as `{lat, lng}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "lng")]
    longitude: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if latitude is outside [-90, 90] or longitude outside [-180, 180]
    /// - `InvalidFormat` if either value is not finite
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ValidationError::invalid_format(
                "coordinates",
                "latitude and longitude must be finite numbers",
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::out_of_range(
                "latitude",
                -90,
                90,
                latitude as i64,
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::out_of_range(
                "longitude",
                -180,
                180,
                longitude as i64,
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lng = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }

    /// `lat, lng` with six decimals, as shown on the review screen.
    pub fn display_fixed(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
