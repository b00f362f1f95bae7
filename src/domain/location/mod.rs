//! Location domain module.
//!
//! Coordinates, the wizard's GeoFix snapshot and the probe that acquires it.

mod coordinates;
mod geo_fix;
mod probe;

pub use coordinates::Coordinates;
pub use geo_fix::{
    GeoFix, LocationFailure, LocationStatus, PlaceAddress, ResolvedLocation,
    FALLBACK_PLACE_NAME, UNNAMED_PLACE_NAME,
};
pub use probe::{LocationProbe, ProbeOutcome, ProbeTicket};
