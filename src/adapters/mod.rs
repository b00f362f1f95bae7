//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `geolocation` - Client-reported and fixed positions
//! - `geocoding` - Nominatim reverse lookups
//! - `storage` - In-memory wizard sessions and report store
//! - `submission` - Simulated report delivery
//! - `http` - Axum routers

pub mod geocoding;
pub mod geolocation;
pub mod http;
pub mod storage;
pub mod submission;

pub use geocoding::{NominatimConfig, NominatimGeocoder};
pub use geolocation::{ClientGeolocationProvider, FixedGeolocationProvider};
pub use storage::{InMemoryReportStore, InMemoryWizardRepository};
pub use submission::SimulatedSubmissionSink;
