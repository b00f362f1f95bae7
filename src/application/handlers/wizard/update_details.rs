//! UpdateDetailsHandler - Command handler for edits on the details form.
//!
//! Covers every input on the form: field buttons and sliders, the free-text
//! description, and the photo slot.

use std::sync::Arc;

use super::load_wizard;
use crate::domain::foundation::WizardId;
use crate::domain::hazard::FieldValue;
use crate::domain::photo::{CaptureOutcome, PhotoEvidence, SelectedImage};
use crate::domain::wizard::{ReportWizard, WizardError};
use crate::ports::WizardRepository;

/// One edit to the open form.
#[derive(Debug, Clone)]
pub enum DetailsUpdate {
    SetField { name: String, value: FieldValue },
    SetDescription(String),
    /// Picker result; `None` when the picker was dismissed.
    CapturePhoto(Option<SelectedImage>),
    /// Photo already encoded as a data URL.
    AttachPhoto(String),
    RetakePhoto,
}

/// Command to apply one edit.
#[derive(Debug, Clone)]
pub struct UpdateDetailsCommand {
    pub wizard_id: WizardId,
    pub update: DetailsUpdate,
}

/// Handler for form edits.
pub struct UpdateDetailsHandler {
    repository: Arc<dyn WizardRepository>,
}

impl UpdateDetailsHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDetailsCommand) -> Result<ReportWizard, WizardError> {
        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;

        let changed = match cmd.update {
            DetailsUpdate::SetField { name, value } => {
                wizard.set_field(&name, value)?;
                true
            }
            DetailsUpdate::SetDescription(description) => {
                wizard.set_description(description)?;
                true
            }
            DetailsUpdate::CapturePhoto(selection) => {
                wizard.capture_photo(selection)? == CaptureOutcome::Captured
            }
            DetailsUpdate::AttachPhoto(data_url) => {
                let evidence = PhotoEvidence::from_data_url(data_url)?;
                wizard.attach_photo(evidence)?;
                true
            }
            DetailsUpdate::RetakePhoto => {
                wizard.retake_photo()?;
                true
            }
        };

        if changed {
            self.repository.save(&wizard).await?;
        }
        Ok(wizard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wizard::test_support::{wizard_at_details, wizard_at_review};
    use crate::domain::hazard::HazardType;

    fn command(wizard_id: WizardId, update: DetailsUpdate) -> UpdateDetailsCommand {
        UpdateDetailsCommand { wizard_id, update }
    }

    #[tokio::test]
    async fn field_answer_is_persisted() {
        let (repo, id) = wizard_at_details(HazardType::WaterQuality).await;
        let handler = UpdateDetailsHandler::new(repo.clone());

        handler
            .handle(command(
                id,
                DetailsUpdate::SetField {
                    name: "issue".to_string(),
                    value: FieldValue::choice("Algae Bloom"),
                },
            ))
            .await
            .unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(
            stored.details().unwrap().answers().get("issue"),
            Some(&FieldValue::choice("Algae Bloom"))
        );
    }

    #[tokio::test]
    async fn option_outside_the_list_is_rejected() {
        let (repo, id) = wizard_at_details(HazardType::WaterQuality).await;
        let handler = UpdateDetailsHandler::new(repo);

        let err = handler
            .handle(command(
                id,
                DetailsUpdate::SetField {
                    name: "issue".to_string(),
                    value: FieldValue::choice("Sharks"),
                },
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, WizardError::InvalidFieldValue(_)));
    }

    #[tokio::test]
    async fn attached_data_url_becomes_the_photo() {
        let (repo, id) = wizard_at_details(HazardType::Other).await;
        let handler = UpdateDetailsHandler::new(repo);

        let wizard = handler
            .handle(command(
                id,
                DetailsUpdate::AttachPhoto("data:image/png;base64,cG5n".to_string()),
            ))
            .await
            .unwrap();

        assert!(wizard.details().unwrap().photo().has_photo());
    }

    #[tokio::test]
    async fn non_image_data_url_is_rejected() {
        let (repo, id) = wizard_at_details(HazardType::Other).await;
        let handler = UpdateDetailsHandler::new(repo);

        let err = handler
            .handle(command(
                id,
                DetailsUpdate::AttachPhoto("data:text/plain;base64,aGk=".to_string()),
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, WizardError::Photo(_)));
    }

    #[tokio::test]
    async fn cancelled_picker_leaves_the_session_untouched() {
        let (repo, id) = wizard_at_details(HazardType::Other).await;
        let before = repo.find_by_id(&id).await.unwrap().unwrap();
        let handler = UpdateDetailsHandler::new(repo.clone());

        handler
            .handle(command(id, DetailsUpdate::CapturePhoto(None)))
            .await
            .unwrap();

        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap(), before);
    }

    #[tokio::test]
    async fn edits_are_refused_during_review() {
        let (repo, id) = wizard_at_review().await;
        let handler = UpdateDetailsHandler::new(repo);

        let err = handler
            .handle(command(id, DetailsUpdate::SetDescription("late".to_string())))
            .await
            .unwrap_err();

        assert_eq!(err, WizardError::DraftFrozen);
    }
}
