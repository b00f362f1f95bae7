//! GeoFix - the reporter's position as known to the wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinates;
use crate::domain::foundation::{StateMachine, Timestamp};

/// Placeholder used when the reverse lookup fails or times out.
pub const FALLBACK_PLACE_NAME: &str = "Location Acquired";

/// Placeholder used when the lookup answers without a town or region.
pub const UNNAMED_PLACE_NAME: &str = "Your Location";

/// Tri-state status exposed to the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    Pending,
    Resolved,
    Failed,
}

impl StateMachine for LocationStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use LocationStatus::*;
        match self {
            Pending => vec![Pending, Resolved, Failed],
            Resolved => vec![Pending],
            Failed => vec![Pending],
        }
    }
}

/// Why a position could not be acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationFailure {
    PermissionDenied,
    CapabilityAbsent,
    Timeout,
}

impl LocationFailure {
    /// Message shown next to the disabled selection grid.
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationFailure::PermissionDenied => "Location access denied",
            LocationFailure::CapabilityAbsent => "Location services are not available on this device",
            LocationFailure::Timeout => "Timed out while acquiring your location",
        }
    }
}

impl fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// A resolved position plus its human-readable place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub place_name: String,
}

impl ResolvedLocation {
    pub fn new(coordinates: Coordinates, place_name: impl Into<String>) -> Self {
        Self {
            coordinates,
            place_name: place_name.into(),
        }
    }

    /// Resolution whose reverse lookup did not produce a name.
    pub fn unnamed(coordinates: Coordinates) -> Self {
        Self::new(coordinates, FALLBACK_PLACE_NAME)
    }
}

/// Address parts returned by a reverse lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
}

impl PlaceAddress {
    /// `"{city|town|village}, {state}"`, or the unnamed placeholder.
    pub fn place_name(&self) -> String {
        let locality = self
            .city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
            .filter(|s| !s.is_empty());
        let region = self.state.as_deref().filter(|s| !s.is_empty());

        match (locality, region) {
            (Some(locality), Some(region)) => format!("{}, {}", locality, region),
            _ => UNNAMED_PLACE_NAME.to_string(),
        }
    }
}

/// Position snapshot carried by the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeoFix {
    Pending,
    Resolved {
        #[serde(flatten)]
        location: ResolvedLocation,
        resolved_at: Timestamp,
    },
    Failed {
        reason: LocationFailure,
    },
}

impl GeoFix {
    pub fn status(&self) -> LocationStatus {
        match self {
            GeoFix::Pending => LocationStatus::Pending,
            GeoFix::Resolved { .. } => LocationStatus::Resolved,
            GeoFix::Failed { .. } => LocationStatus::Failed,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, GeoFix::Resolved { .. })
    }

    pub fn resolved(&self) -> Option<&ResolvedLocation> {
        match self {
            GeoFix::Resolved { location, .. } => Some(location),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<LocationFailure> {
        match self {
            GeoFix::Failed { reason } => Some(*reason),
            _ => None,
        }
    }
}
