//! SubmitReportHandler - Command handler for delivering the frozen draft.
//!
//! Each call claims a leased attempt, then hands delivery to a task that
//! records the outcome even if the caller goes away. A failed delivery
//! leaves the session in `Submitting` with the error recorded; calling the
//! handler again resends the identical draft.

use std::sync::Arc;
use std::time::Duration;

use super::load_wizard;
use crate::domain::foundation::{ReportId, Timestamp, WizardId};
use crate::domain::wizard::{
    ReportWizard, SubmissionAttempt, WizardError, DEFAULT_ATTEMPT_LEASE,
};
use crate::ports::{SubmissionSink, WizardRepository};

/// Command to submit (or resubmit) the current draft.
#[derive(Debug, Clone)]
pub struct SubmitReportCommand {
    pub wizard_id: WizardId,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitReportResult {
    pub wizard: ReportWizard,
    pub report_id: ReportId,
}

/// Handler for report submission.
pub struct SubmitReportHandler {
    repository: Arc<dyn WizardRepository>,
    sink: Arc<dyn SubmissionSink>,
    attempt_lease: Duration,
}

impl SubmitReportHandler {
    pub fn new(repository: Arc<dyn WizardRepository>, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            repository,
            sink,
            attempt_lease: DEFAULT_ATTEMPT_LEASE,
        }
    }

    /// How long an attempt blocks new ones if its outcome is never recorded.
    pub fn with_attempt_lease(mut self, lease: Duration) -> Self {
        self.attempt_lease = lease;
        self
    }

    pub async fn handle(&self, cmd: SubmitReportCommand) -> Result<SubmitReportResult, WizardError> {
        // 1. Freeze and claim an attempt; the versioned save makes the claim exclusive
        let mut wizard = load_wizard(self.repository.as_ref(), &cmd.wizard_id).await?;
        let attempt = wizard.begin_submission(Timestamp::now(), self.attempt_lease)?;
        self.repository.save(&wizard).await?;
        tracing::info!(
            wizard_id = %cmd.wizard_id,
            attempt = attempt.number,
            hazard_type = %attempt.draft.hazard_type,
            "Submitting report"
        );

        // 2-3. Deliver and record the outcome
        let delivery = tokio::spawn(deliver(
            self.repository.clone(),
            self.sink.clone(),
            cmd.wizard_id,
            attempt,
        ));
        delivery
            .await
            .map_err(|e| WizardError::infrastructure(format!("Submission task failed: {}", e)))?
    }
}

async fn deliver(
    repository: Arc<dyn WizardRepository>,
    sink: Arc<dyn SubmissionSink>,
    wizard_id: WizardId,
    attempt: SubmissionAttempt,
) -> Result<SubmitReportResult, WizardError> {
    let delivered = sink.submit(&attempt.draft).await;

    // Apply to the latest stored state
    let mut wizard = load_wizard(repository.as_ref(), &wizard_id).await?;
    if !wizard.is_current_attempt(attempt.number) {
        tracing::warn!(
            %wizard_id,
            attempt = attempt.number,
            step = %wizard.step(),
            delivered = delivered.is_ok(),
            "Discarded outcome of a superseded submission attempt"
        );
        return Err(WizardError::Conflict);
    }

    match delivered {
        Ok(report_id) => {
            wizard.confirm_submission(attempt.number, report_id.clone())?;
            repository.save(&wizard).await?;
            tracing::info!(%wizard_id, %report_id, "Report confirmed");
            Ok(SubmitReportResult { wizard, report_id })
        }
        Err(e) => {
            tracing::error!(
                %wizard_id,
                attempt = attempt.number,
                retryable = e.is_retryable(),
                "Report submission failed: {}",
                e
            );
            let err = wizard.record_submission_failure(attempt.number, e.to_string());
            repository.save(&wizard).await?;
            Err(err)
        }
    }
}
