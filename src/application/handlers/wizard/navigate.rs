//! Back navigation and abandonment.

use std::sync::Arc;

use super::load_wizard;
use crate::domain::foundation::WizardId;
use crate::domain::wizard::{ReportWizard, WizardError};
use crate::ports::WizardRepository;

/// Command to step back one screen.
#[derive(Debug, Clone)]
pub struct GoBackCommand {
    pub wizard_id: WizardId,
}

/// Handler for back navigation.
pub struct GoBackHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GoBackHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: GoBackCommand) -> Result<ReportWizard, WizardError> {
        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;
        wizard.go_back()?;
        self.repository.save(&wizard).await?;
        Ok(wizard)
    }
}

/// Command to discard the current report and return to type selection.
#[derive(Debug, Clone)]
pub struct AbandonWizardCommand {
    pub wizard_id: WizardId,
}

/// Handler for abandoning a report.
pub struct AbandonWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl AbandonWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AbandonWizardCommand) -> Result<ReportWizard, WizardError> {
        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;
        let from = wizard.step();
        wizard.abandon();
        self.repository.save(&wizard).await?;

        tracing::info!(wizard_id = %cmd.wizard_id, %from, "Report abandoned");
        Ok(wizard)
    }
}
