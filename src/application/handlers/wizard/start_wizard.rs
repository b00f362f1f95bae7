//! StartWizardHandler - Command handler for opening a reporting session.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::wizard::{ReportWizard, WizardError};
use crate::ports::WizardRepository;

/// Command to start a new reporting session.
#[derive(Debug, Clone, Default)]
pub struct StartWizardCommand;

/// Handler for starting sessions.
pub struct StartWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl StartWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    /// Creates a session on the selection screen with location acquisition
    /// already started.
    pub async fn handle(&self, _cmd: StartWizardCommand) -> Result<ReportWizard, WizardError> {
        let mut wizard = ReportWizard::new(WizardId::new());
        wizard.activate_location()?;

        self.repository.save(&wizard).await?;

        tracing::info!(wizard_id = %wizard.id(), "Report wizard started");
        Ok(wizard)
    }
}
