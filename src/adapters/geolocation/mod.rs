//! Geolocation Adapters
//!
//! Implementations of the GeolocationProvider port.
//!
//! ## Available Adapters
//!
//! - **ClientGeolocationProvider** - Position reported by the reporter's device
//! - **FixedGeolocationProvider** - One configured position (fallback, tests)

mod client_reported;
mod fixed;

pub use client_reported::ClientGeolocationProvider;
pub use fixed::FixedGeolocationProvider;
