//! Geocoding Adapters
//!
//! Implementations of the ReverseGeocoder port.

mod nominatim;

pub use nominatim::{NominatimConfig, NominatimGeocoder};
