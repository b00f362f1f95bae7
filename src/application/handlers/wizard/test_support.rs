//! Shared fixtures for wizard handler tests.

use std::sync::Arc;

use crate::adapters::storage::InMemoryWizardRepository;
use crate::domain::foundation::WizardId;
use crate::domain::hazard::{FieldValue, HazardCatalog, HazardType};
use crate::domain::location::{Coordinates, ResolvedLocation};
use crate::domain::photo::PhotoEvidence;
use crate::domain::wizard::ReportWizard;
use crate::ports::WizardRepository;

pub fn santa_monica() -> ResolvedLocation {
    ResolvedLocation::new(
        Coordinates::new(34.0194, -118.4912).unwrap(),
        "Santa Monica, CA",
    )
}

pub fn png_photo() -> PhotoEvidence {
    PhotoEvidence::encode("image/png", b"png").unwrap()
}

async fn store(wizard: ReportWizard) -> (Arc<InMemoryWizardRepository>, WizardId) {
    let repo = Arc::new(InMemoryWizardRepository::new());
    repo.save(&wizard).await.unwrap();
    (repo, *wizard.id())
}

fn located() -> ReportWizard {
    let mut wizard = ReportWizard::new(WizardId::new());
    let ticket = wizard.activate_location().unwrap();
    wizard.complete_location(ticket, Ok(santa_monica()));
    wizard
}

fn at_details(hazard_type: HazardType) -> ReportWizard {
    let mut wizard = located();
    wizard
        .select_hazard(HazardCatalog::standard(), hazard_type)
        .unwrap();
    wizard
}

/// Session on the selection screen with a resolved location.
pub async fn located_wizard() -> (Arc<InMemoryWizardRepository>, WizardId) {
    store(located()).await
}

/// Session with an empty form open.
pub async fn wizard_at_details(hazard_type: HazardType) -> (Arc<InMemoryWizardRepository>, WizardId) {
    store(at_details(hazard_type)).await
}

/// Oil spill session on the review screen (size answered, photo attached).
pub async fn wizard_at_review() -> (Arc<InMemoryWizardRepository>, WizardId) {
    let mut wizard = at_details(HazardType::OilSpill);
    wizard.set_field("size", FieldValue::Position(1)).unwrap();
    wizard.attach_photo(png_photo()).unwrap();
    wizard.proceed_to_review().unwrap();
    store(wizard).await
}
