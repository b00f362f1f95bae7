//! GetReportHandler - Query handler for a single submitted report.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId};
use crate::domain::reports::HazardReport;
use crate::ports::ReportReader;

/// Query for one report by its `CS-` identifier.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub report_id: ReportId,
}

/// Handler for single report lookups.
pub struct GetReportHandler {
    reader: Arc<dyn ReportReader>,
}

impl GetReportHandler {
    pub fn new(reader: Arc<dyn ReportReader>) -> Self {
        Self { reader }
    }

    /// # Errors
    ///
    /// - `ReportNotFound` if no report has the identifier
    pub async fn handle(&self, query: GetReportQuery) -> Result<HazardReport, DomainError> {
        self.reader.get(&query.report_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::ReportNotFound, "Report not found")
                .with_detail("report_id", query.report_id.to_string())
        })
    }
}
