//! Submission sink port.
//!
//! Accepts a frozen report draft and answers with the identifier it was
//! filed under.

use async_trait::async_trait;

use crate::domain::foundation::ReportId;
use crate::domain::wizard::ReportDraft;

/// Delivery failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission service unavailable: {0}")]
    Unavailable(String),

    #[error("submission timed out")]
    Timeout,

    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl SubmissionError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        SubmissionError::Unavailable(message.into())
    }

    /// Resending the same draft may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmissionError::Unavailable(_) | SubmissionError::Timeout
        )
    }
}

/// Port for delivering finished reports.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Files `draft` and returns its identifier.
    ///
    /// The draft is passed by reference and must not be altered; a retry
    /// sends the identical value.
    async fn submit(&self, draft: &ReportDraft) -> Result<ReportId, SubmissionError>;
}
