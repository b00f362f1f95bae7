//! In-Memory Wizard Repository
//!
//! Holds wizard sessions in process memory. Sessions do not survive a
//! restart, matching the single-session lifetime of a report flow.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, WizardId};
use crate::domain::wizard::ReportWizard;
use crate::ports::WizardRepository;

/// In-memory storage for wizard sessions
#[derive(Debug, Clone)]
pub struct InMemoryWizardRepository {
    wizards: Arc<RwLock<HashMap<WizardId, ReportWizard>>>,
}

impl InMemoryWizardRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            wizards: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.wizards.write().await.clear();
    }

    /// Get the number of stored sessions
    pub async fn count(&self) -> usize {
        self.wizards.read().await.len()
    }
}

impl Default for InMemoryWizardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WizardRepository for InMemoryWizardRepository {
    async fn save(&self, wizard: &ReportWizard) -> Result<(), DomainError> {
        let mut wizards = self.wizards.write().await;
        if let Some(stored) = wizards.get(wizard.id()) {
            if stored.version() != wizard.version() {
                return Err(DomainError::new(
                    ErrorCode::ConcurrencyConflict,
                    "Wizard version mismatch - another update occurred",
                )
                .with_detail("wizard_id", wizard.id().to_string())
                .with_detail("expected_version", wizard.version().to_string())
                .with_detail("actual_version", stored.version().to_string()));
            }
        }

        let mut stored = wizard.clone();
        stored.increment_version();
        wizards.insert(*wizard.id(), stored);
        Ok(())
    }

    async fn find_by_id(&self, id: &WizardId) -> Result<Option<ReportWizard>, DomainError> {
        let wizards = self.wizards.read().await;
        Ok(wizards.get(id).cloned())
    }

    async fn delete(&self, id: &WizardId) -> Result<(), DomainError> {
        self.wizards.write().await.remove(id);
        Ok(())
    }
}
