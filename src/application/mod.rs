//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Wizard handlers
    AbandonWizardCommand, AbandonWizardHandler,
    AcquireLocationCommand, AcquireLocationHandler, AcquireLocationResult,
    DetailsUpdate, UpdateDetailsCommand, UpdateDetailsHandler,
    GetWizardHandler, GetWizardQuery,
    GoBackCommand, GoBackHandler,
    ProceedToReviewCommand, ProceedToReviewHandler, ProceedToReviewResult,
    ResolveRouteHandler, ResolveRouteQuery,
    SelectHazardCommand, SelectHazardHandler, SelectHazardResult,
    StartWizardCommand, StartWizardHandler,
    SubmitReportCommand, SubmitReportHandler, SubmitReportResult,
    // Report handlers
    GetReportHandler, GetReportQuery, ListReportsHandler, ListReportsQuery,
};
