//! Wizard domain module.
//!
//! The report flow: the session aggregate, its step machine, the draft it
//! produces and the page guard in front of it.

mod aggregate;
mod draft;
mod errors;
mod review;
mod route;
mod step;

pub use aggregate::{
    Confirmation, DetailsForm, ReportWizard, SubmissionAttempt, SubmissionState,
    DEFAULT_ATTEMPT_LEASE,
};
pub use draft::{FieldAnswers, ReportDraft};
pub use errors::WizardError;
pub use review::{ReviewDetail, ReviewSummary};
pub use route::{guard, RouteDecision, WizardRoute, ENTRY_PATH};
pub use step::WizardStep;
