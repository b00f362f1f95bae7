//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod reports;
pub mod wizard;

pub use reports::{GetReportHandler, GetReportQuery, ListReportsHandler, ListReportsQuery};
pub use wizard::{
    AbandonWizardCommand, AbandonWizardHandler, AcquireLocationCommand, AcquireLocationHandler,
    AcquireLocationResult, DetailsUpdate, GetWizardHandler, GetWizardQuery, GoBackCommand,
    GoBackHandler, ProceedToReviewCommand, ProceedToReviewHandler, ProceedToReviewResult,
    ResolveRouteHandler, ResolveRouteQuery, SelectHazardCommand, SelectHazardHandler,
    SelectHazardResult, StartWizardCommand, StartWizardHandler, SubmitReportCommand,
    SubmitReportHandler, SubmitReportResult, UpdateDetailsCommand, UpdateDetailsHandler,
};
