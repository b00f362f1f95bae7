//! Query handlers for reading a session.

use std::sync::Arc;

use super::load_wizard;
use crate::domain::foundation::WizardId;
use crate::domain::wizard::{ReportWizard, ReviewSummary, WizardError};
use crate::ports::WizardRepository;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetWizardQuery {
    pub wizard_id: WizardId,
}

/// Handler for retrieving sessions.
pub struct GetWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GetWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWizardQuery) -> Result<ReportWizard, WizardError> {
        load_wizard(self.repository.as_ref(), &query.wizard_id).await
    }

    /// Review rendering of the session's draft.
    ///
    /// # Errors
    ///
    /// - `WrongStep` unless the session is reviewing or submitting
    pub async fn review(&self, query: GetWizardQuery) -> Result<ReviewSummary, WizardError> {
        load_wizard(self.repository.as_ref(), &query.wizard_id)
            .await?
            .review()
    }
}
