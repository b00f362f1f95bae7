//! Domain layer containing the reporting rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, state machines)
//! - `hazard` - Hazard categories and the static form catalog
//! - `location` - Coordinates and the location probe
//! - `photo` - Photo evidence capture
//! - `wizard` - The report flow aggregate, its draft and page guard
//! - `reports` - Submitted reports and listing filters

pub mod foundation;
pub mod hazard;
pub mod location;
pub mod photo;
pub mod reports;
pub mod wizard;
