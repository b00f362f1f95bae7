//! SelectHazardHandler - Command handler for picking a hazard type.

use std::sync::Arc;

use super::load_wizard;
use crate::domain::foundation::WizardId;
use crate::domain::hazard::{FieldSchema, HazardCatalog, HazardType};
use crate::domain::wizard::{ReportWizard, WizardError};
use crate::ports::WizardRepository;

/// Command to choose a hazard type by slug.
#[derive(Debug, Clone)]
pub struct SelectHazardCommand {
    pub wizard_id: WizardId,
    pub hazard_type: String,
}

/// Result of a selection: the session and the form it now shows.
#[derive(Debug, Clone)]
pub struct SelectHazardResult {
    pub wizard: ReportWizard,
    pub schema: FieldSchema,
}

/// Handler for hazard type selection.
pub struct SelectHazardHandler {
    repository: Arc<dyn WizardRepository>,
    catalog: &'static HazardCatalog,
}

impl SelectHazardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>, catalog: &'static HazardCatalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(&self, cmd: SelectHazardCommand) -> Result<SelectHazardResult, WizardError> {
        let hazard_type: HazardType = cmd.hazard_type.parse()?;

        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;
        let schema = wizard.select_hazard(self.catalog, hazard_type)?.clone();
        self.repository.save(&wizard).await?;

        tracing::info!(wizard_id = %cmd.wizard_id, %hazard_type, "Hazard type selected");
        Ok(SelectHazardResult { wizard, schema })
    }
}
