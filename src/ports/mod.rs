//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Location Ports
//!
//! - `GeolocationProvider` - The reporter's current position
//! - `ReverseGeocoder` - Place names for coordinates
//!
//! ## Report Ports
//!
//! - `SubmissionSink` - Delivery of finished drafts
//! - `ReportReader` - Listing of submitted reports
//!
//! ## Session Ports
//!
//! - `WizardRepository` - Wizard aggregate persistence

mod geolocation_provider;
mod report_reader;
mod reverse_geocoder;
mod submission_sink;
mod wizard_repository;

pub use geolocation_provider::{
    GeolocationOptions, GeolocationProvider, PositionFix, PositionRequest, ReportedPosition,
};
pub use report_reader::ReportReader;
pub use reverse_geocoder::{GeocodingError, ReverseGeocoder};
pub use submission_sink::{SubmissionError, SubmissionSink};
pub use wizard_repository::WizardRepository;
