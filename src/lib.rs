//! Coastal Sentinel - Community Ocean Hazard Reporting
//!
//! This crate implements the guided report wizard (location, hazard type,
//! details and photo, review, submission) as a hexagonal backend service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
