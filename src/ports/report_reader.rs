//! Report reader port (read side).
//!
//! Lists submitted reports for the map and list views.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReportId};
use crate::domain::reports::{HazardReport, ReportFilter};

/// Read-only port for submitted reports.
#[async_trait]
pub trait ReportReader: Send + Sync {
    /// Reports matching `filter`, newest first.
    async fn list(&self, filter: &ReportFilter) -> Result<Vec<HazardReport>, DomainError>;

    /// A single report by ID.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: &ReportId) -> Result<Option<HazardReport>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ReportReader) {}
    }
}
