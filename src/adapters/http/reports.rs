//! HTTP adapter for submitted reports.
//!
//! - `GET /api/reports?types=&window=&lat=&lng=&radius_km=` - Filtered listing
//! - `GET /api/reports/:id` - One report

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::application::handlers::reports::{
    GetReportHandler, GetReportQuery, ListReportsHandler, ListReportsQuery,
};
use crate::domain::foundation::{DomainError, ReportId};
use crate::domain::hazard::HazardType;
use crate::domain::location::Coordinates;
use crate::domain::reports::{HazardReport, Radius, ReportFilter, TimeWindow};
use crate::ports::ReportReader;

/// Shared state for the report endpoints.
#[derive(Clone)]
pub struct ReportsAppState {
    pub reader: Arc<dyn ReportReader>,
}

impl ReportsAppState {
    pub fn list_reports_handler(&self) -> ListReportsHandler {
        ListReportsHandler::new(self.reader.clone())
    }

    pub fn get_report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.reader.clone())
    }
}

/// Raw listing query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListReportsParams {
    /// Comma-separated hazard slugs. Absent means every type; present but
    /// empty means none.
    pub types: Option<String>,
    pub window: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
}

impl ListReportsParams {
    pub fn into_filter(self) -> Result<ReportFilter, ApiError> {
        let mut filter = ReportFilter::all();

        if let Some(types) = self.types.as_deref() {
            let parsed = types
                .split(',')
                .map(str::trim)
                .filter(|slug| !slug.is_empty())
                .map(|slug| slug.parse::<HazardType>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
            filter = filter.with_types(parsed);
        }

        if let Some(window) = self.window.as_deref() {
            let window: TimeWindow = window.parse().map_err(DomainError::from)?;
            filter = filter.with_window(window);
        }

        match (self.lat, self.lng, self.radius_km) {
            (None, None, None) => {}
            (Some(lat), Some(lng), Some(km)) => {
                let center = Coordinates::new(lat, lng).map_err(DomainError::from)?;
                filter = filter.within(Radius::new(center, km).map_err(DomainError::from)?);
            }
            _ => {
                return Err(ApiError::bad_request(
                    "lat, lng and radius_km must be given together",
                ))
            }
        }

        Ok(filter)
    }
}

/// Report plus its display title.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub title: &'static str,
    #[serde(flatten)]
    pub report: HazardReport,
}

impl From<HazardReport> for ReportResponse {
    fn from(report: HazardReport) -> Self {
        Self {
            title: report.title(),
            report,
        }
    }
}

/// GET /api/reports
pub async fn list_reports(
    State(state): State<ReportsAppState>,
    Query(params): Query<ListReportsParams>,
) -> Result<Json<Vec<ReportResponse>>, ApiError> {
    let query = ListReportsQuery {
        filter: params.into_filter()?,
    };
    let reports = state.list_reports_handler().handle(query).await?;
    Ok(Json(reports.into_iter().map(ReportResponse::from).collect()))
}

/// GET /api/reports/:id
pub async fn get_report(
    State(state): State<ReportsAppState>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let report_id: ReportId = id
        .parse()
        .map_err(|_| ApiError::not_found(format!("Report not found: {}", id)))?;
    let report = state
        .get_report_handler()
        .handle(GetReportQuery { report_id })
        .await?;
    Ok(Json(ReportResponse::from(report)))
}

/// Create the reports router.
pub fn reports_router() -> Router<ReportsAppState> {
    Router::new()
        .route("/api/reports", get(list_reports))
        .route("/api/reports/:id", get(get_report))
}
