//! Simulated submission sink.
//!
//! Stands in for a remote reporting backend: waits a fixed delay, then files
//! the draft in the report store under a fresh `CS-` identifier.
//!
//! # Features
//!
//! - Fixed latency per submission
//! - Error injection for retry testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let sink = SimulatedSubmissionSink::new(store.clone())
//!     .with_delay(Duration::from_millis(1500))
//!     .with_failure(SubmissionError::unavailable("maintenance"));
//!
//! assert!(sink.submit(&draft).await.is_err());   // injected failure
//! let id = sink.submit(&draft).await?;           // filed
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::adapters::storage::InMemoryReportStore;
use crate::domain::foundation::ReportId;
use crate::domain::reports::HazardReport;
use crate::domain::wizard::ReportDraft;
use crate::ports::{SubmissionError, SubmissionSink};

/// Submission sink backed by the in-memory report store.
#[derive(Debug, Clone)]
pub struct SimulatedSubmissionSink {
    store: InMemoryReportStore,
    delay: Duration,
    /// Failures returned by upcoming calls, consumed in order.
    failures: Arc<Mutex<VecDeque<SubmissionError>>>,
    /// Every draft received, including failed attempts.
    calls: Arc<Mutex<Vec<ReportDraft>>>,
}

impl SimulatedSubmissionSink {
    pub fn new(store: InMemoryReportStore) -> Self {
        Self {
            store,
            delay: Duration::ZERO,
            failures: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Simulated network latency per submission.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queues a failure for the next call that has none queued ahead of it.
    pub fn with_failure(self, error: SubmissionError) -> Self {
        // Not yet shared, so the lock is free.
        if let Ok(mut failures) = self.failures.try_lock() {
            failures.push_back(error);
        }
        self
    }

    /// Queues a failure on a sink that is already in use.
    pub async fn fail_next(&self, error: SubmissionError) {
        self.failures.lock().await.push_back(error);
    }

    /// Drafts received so far.
    pub async fn calls(&self) -> Vec<ReportDraft> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl SubmissionSink for SimulatedSubmissionSink {
    async fn submit(&self, draft: &ReportDraft) -> Result<ReportId, SubmissionError> {
        self.calls.lock().await.push(draft.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if let Some(error) = self.failures.lock().await.pop_front() {
            tracing::warn!("Simulated submission failure: {}", error);
            return Err(error);
        }

        let id = ReportId::generate();
        self.store
            .insert(HazardReport::from_draft(id.clone(), draft))
            .await;
        tracing::info!(report_id = %id, hazard_type = %draft.hazard_type, "Report filed");
        Ok(id)
    }
}
