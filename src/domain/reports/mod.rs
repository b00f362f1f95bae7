//! Reports domain module.
//!
//! Submitted reports and the criteria used to list them.

mod filter;
mod report;

pub use filter::{Radius, ReportFilter, TimeWindow};
pub use report::HazardReport;
