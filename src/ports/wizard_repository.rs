//! Wizard repository port.
//!
//! Persists ReportWizard aggregates between requests.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, WizardId};
use crate::domain::wizard::ReportWizard;

/// Repository port for ReportWizard persistence.
#[async_trait]
pub trait WizardRepository: Send + Sync {
    /// Save a new or updated wizard, replacing the stored copy.
    ///
    /// Uses optimistic locking: the save is accepted only when `wizard`
    /// carries the version currently stored, and the stored copy then moves
    /// to the next version. Reload before saving again.
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if another save happened since `wizard` was loaded
    /// - `StorageError` on persistence failure
    async fn save(&self, wizard: &ReportWizard) -> Result<(), DomainError>;

    /// Find a wizard by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &WizardId) -> Result<Option<ReportWizard>, DomainError>;

    /// Remove a wizard. Removing an unknown ID is not an error.
    async fn delete(&self, id: &WizardId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn wizard_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn WizardRepository) {}
    }
}
