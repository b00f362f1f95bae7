//! In-Memory Report Store
//!
//! Keeps submitted reports in memory. The simulated submission sink writes
//! here and the report listing reads from here.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ReportId, Timestamp};
use crate::domain::hazard::HazardType;
use crate::domain::location::Coordinates;
use crate::domain::reports::{HazardReport, ReportFilter};
use crate::domain::wizard::FieldAnswers;
use crate::ports::ReportReader;

/// In-memory storage for submitted reports
#[derive(Debug, Clone)]
pub struct InMemoryReportStore {
    reports: Arc<RwLock<Vec<HazardReport>>>,
}

impl InMemoryReportStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            reports: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Store pre-filled with the Santa Monica sample reports shown on the map.
    ///
    /// Times are relative to `now` so the samples always read as recent.
    pub fn with_sample_reports(now: &Timestamp) -> Self {
        let samples = [
            (HazardType::OilSpill, 34.0085, -118.4965, now.minus_hours(2)),
            (HazardType::MarineDebris, 34.0205, -118.4895, now.minus_hours(5)),
            (HazardType::StormWaves, 34.0125, -118.5065, now.minus_minutes(30)),
        ];

        let reports = samples
            .into_iter()
            .filter_map(|(hazard_type, lat, lng, reported_at)| {
                let location = Coordinates::new(lat, lng).ok()?;
                Some(HazardReport {
                    id: ReportId::generate(),
                    hazard_type,
                    location,
                    location_name: "Santa Monica, CA".to_string(),
                    photo: None,
                    fields: FieldAnswers::new(),
                    description: String::new(),
                    reported_at,
                })
            })
            .collect();

        Self {
            reports: Arc::new(RwLock::new(reports)),
        }
    }

    /// Add a report
    pub async fn insert(&self, report: HazardReport) {
        self.reports.write().await.push(report);
    }

    /// Get the number of stored reports
    pub async fn count(&self) -> usize {
        self.reports.read().await.len()
    }
}

impl Default for InMemoryReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportReader for InMemoryReportStore {
    async fn list(&self, filter: &ReportFilter) -> Result<Vec<HazardReport>, DomainError> {
        let now = Timestamp::now();
        let reports = self.reports.read().await;
        let mut matching: Vec<HazardReport> = reports
            .iter()
            .filter(|report| filter.matches(report, &now))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        Ok(matching)
    }

    async fn get(&self, id: &ReportId) -> Result<Option<HazardReport>, DomainError> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|report| &report.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reports::{Radius, TimeWindow};

    #[tokio::test]
    async fn samples_are_listed_newest_first() {
        let store = InMemoryReportStore::with_sample_reports(&Timestamp::now());

        let reports = store.list(&ReportFilter::all()).await.unwrap();

        let types: Vec<_> = reports.iter().map(|r| r.hazard_type).collect();
        assert_eq!(
            types,
            vec![
                HazardType::StormWaves,
                HazardType::OilSpill,
                HazardType::MarineDebris
            ]
        );
    }

    #[tokio::test]
    async fn list_applies_filter() {
        let store = InMemoryReportStore::with_sample_reports(&Timestamp::now());
        let filter = ReportFilter::all()
            .with_types([HazardType::OilSpill, HazardType::MarineDebris])
            .with_window(TimeWindow::Last24Hours);

        let reports = store.list(&filter).await.unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.hazard_type != HazardType::StormWaves));
    }

    #[tokio::test]
    async fn radius_far_from_samples_lists_nothing() {
        let store = InMemoryReportStore::with_sample_reports(&Timestamp::now());
        let honolulu = Coordinates::new(21.3069, -157.8583).unwrap();
        let filter = ReportFilter::all().within(Radius::new(honolulu, 50.0).unwrap());

        assert!(store.list(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn inserted_report_can_be_fetched_by_id() {
        let store = InMemoryReportStore::new();
        let mut sample = InMemoryReportStore::with_sample_reports(&Timestamp::now())
            .list(&ReportFilter::all())
            .await
            .unwrap();
        let report = sample.remove(0);
        let id = report.id.clone();

        store.insert(report).await;

        assert_eq!(store.count().await, 1);
        assert_eq!(store.get(&id).await.unwrap().unwrap().id, id);
        assert!(store.get(&ReportId::generate()).await.unwrap().is_none());
    }
}
