//! Wizard command and query handlers.

mod acquire_location;
mod get_wizard;
mod navigate;
mod proceed_to_review;
mod resolve_route;
mod select_hazard;
mod start_wizard;
mod submit_report;
mod update_details;

#[cfg(test)]
pub(crate) mod test_support;

pub use acquire_location::{AcquireLocationCommand, AcquireLocationHandler, AcquireLocationResult};
pub use get_wizard::{GetWizardHandler, GetWizardQuery};
pub use navigate::{AbandonWizardCommand, AbandonWizardHandler, GoBackCommand, GoBackHandler};
pub use proceed_to_review::{
    ProceedToReviewCommand, ProceedToReviewHandler, ProceedToReviewResult,
};
pub use resolve_route::{ResolveRouteHandler, ResolveRouteQuery};
pub use select_hazard::{SelectHazardCommand, SelectHazardHandler, SelectHazardResult};
pub use start_wizard::{StartWizardCommand, StartWizardHandler};
pub use submit_report::{SubmitReportCommand, SubmitReportHandler, SubmitReportResult};
pub use update_details::{DetailsUpdate, UpdateDetailsCommand, UpdateDetailsHandler};

use crate::domain::foundation::WizardId;
use crate::domain::wizard::{ReportWizard, WizardError};
use crate::ports::WizardRepository;

/// Loads a session or fails with `NotFound`.
async fn load_wizard(
    repository: &dyn WizardRepository,
    id: &WizardId,
) -> Result<ReportWizard, WizardError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(WizardError::NotFound(*id))
}
