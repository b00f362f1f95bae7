//! Report query handlers.

mod get_report;
mod list_reports;

pub use get_report::{GetReportHandler, GetReportQuery};
pub use list_reports::{ListReportsHandler, ListReportsQuery};
