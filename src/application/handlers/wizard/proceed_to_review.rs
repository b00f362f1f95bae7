//! ProceedToReviewHandler - Command handler for freezing the form into a draft.

use std::sync::Arc;

use super::load_wizard;
use crate::domain::foundation::WizardId;
use crate::domain::wizard::{ReportWizard, ReviewSummary, WizardError};
use crate::ports::WizardRepository;

/// Command to leave the details step.
#[derive(Debug, Clone)]
pub struct ProceedToReviewCommand {
    pub wizard_id: WizardId,
}

/// Result: the session and what the review screen shows.
#[derive(Debug, Clone)]
pub struct ProceedToReviewResult {
    pub wizard: ReportWizard,
    pub review: ReviewSummary,
}

/// Handler for the details to review transition.
pub struct ProceedToReviewHandler {
    repository: Arc<dyn WizardRepository>,
}

impl ProceedToReviewHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ProceedToReviewCommand,
    ) -> Result<ProceedToReviewResult, WizardError> {
        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;
        wizard.proceed_to_review()?;
        let review = wizard.review()?;
        self.repository.save(&wizard).await?;

        Ok(ProceedToReviewResult { wizard, review })
    }
}
