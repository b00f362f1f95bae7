//! ListReportsHandler - Query handler for the report map and list.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::reports::{HazardReport, ReportFilter};
use crate::ports::ReportReader;

/// Query for submitted reports.
#[derive(Debug, Clone, Default)]
pub struct ListReportsQuery {
    pub filter: ReportFilter,
}

/// Handler for report listings.
pub struct ListReportsHandler {
    reader: Arc<dyn ReportReader>,
}

impl ListReportsHandler {
    pub fn new(reader: Arc<dyn ReportReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListReportsQuery) -> Result<Vec<HazardReport>, DomainError> {
        self.reader.list(&query.filter).await
    }
}
