//! HTTP handlers for the report wizard endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::wizard::{
    AbandonWizardCommand, AbandonWizardHandler, AcquireLocationCommand, AcquireLocationHandler,
    DetailsUpdate, GetWizardHandler, GetWizardQuery, GoBackCommand, GoBackHandler,
    ProceedToReviewCommand, ProceedToReviewHandler, ResolveRouteHandler, ResolveRouteQuery,
    SelectHazardCommand, SelectHazardHandler, StartWizardCommand, StartWizardHandler,
    SubmitReportCommand, SubmitReportHandler, UpdateDetailsCommand, UpdateDetailsHandler,
};
use crate::domain::foundation::WizardId;
use crate::domain::hazard::HazardCatalog;
use crate::domain::wizard::RouteDecision;
use crate::ports::{
    GeolocationOptions, GeolocationProvider, ReportedPosition, ReverseGeocoder, SubmissionSink,
    WizardRepository,
};

use super::dto::{
    AttachPhotoRequest, PageResponse, SelectHazardRequest, SetDescriptionRequest,
    SetFieldRequest, WizardView,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the wizard API and the page navigation surface.
#[derive(Clone)]
pub struct WizardAppState {
    pub repository: Arc<dyn WizardRepository>,
    pub geolocation: Arc<dyn GeolocationProvider>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub sink: Arc<dyn SubmissionSink>,
    pub geolocation_options: GeolocationOptions,
    pub catalog: &'static HazardCatalog,
    /// Lease of one delivery attempt.
    pub submission_lease: Duration,
    /// Body limit of the photo upload route.
    pub photo_body_limit: usize,
}

impl WizardAppState {
    pub fn start_wizard_handler(&self) -> StartWizardHandler {
        StartWizardHandler::new(self.repository.clone())
    }

    pub fn acquire_location_handler(&self) -> AcquireLocationHandler {
        AcquireLocationHandler::new(
            self.repository.clone(),
            self.geolocation.clone(),
            self.geocoder.clone(),
            self.geolocation_options,
        )
    }

    pub fn select_hazard_handler(&self) -> SelectHazardHandler {
        SelectHazardHandler::new(self.repository.clone(), self.catalog)
    }

    pub fn update_details_handler(&self) -> UpdateDetailsHandler {
        UpdateDetailsHandler::new(self.repository.clone())
    }

    pub fn proceed_to_review_handler(&self) -> ProceedToReviewHandler {
        ProceedToReviewHandler::new(self.repository.clone())
    }

    pub fn go_back_handler(&self) -> GoBackHandler {
        GoBackHandler::new(self.repository.clone())
    }

    pub fn abandon_handler(&self) -> AbandonWizardHandler {
        AbandonWizardHandler::new(self.repository.clone())
    }

    pub fn submit_report_handler(&self) -> SubmitReportHandler {
        SubmitReportHandler::new(self.repository.clone(), self.sink.clone())
            .with_attempt_lease(self.submission_lease)
    }

    pub fn get_wizard_handler(&self) -> GetWizardHandler {
        GetWizardHandler::new(self.repository.clone())
    }

    pub fn resolve_route_handler(&self) -> ResolveRouteHandler {
        ResolveRouteHandler::new(self.repository.clone())
    }
}

fn parse_wizard_id(raw: &str) -> Result<WizardId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid wizard id: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Session Lifecycle
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/wizards - Start a reporting session
pub async fn start_wizard(
    State(state): State<WizardAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let wizard = state.start_wizard_handler().handle(StartWizardCommand).await?;
    Ok((StatusCode::CREATED, Json(WizardView::from(&wizard))))
}

/// GET /api/wizards/:id - Current session state
pub async fn get_wizard(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let query = GetWizardQuery {
        wizard_id: parse_wizard_id(&id)?,
    };
    let wizard = state.get_wizard_handler().handle(query).await?;
    Ok(Json(WizardView::from(&wizard)))
}

/// POST /api/wizards/:id/abandon - Discard the report, keep the location
pub async fn abandon_wizard(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let cmd = AbandonWizardCommand {
        wizard_id: parse_wizard_id(&id)?,
    };
    let wizard = state.abandon_handler().handle(cmd).await?;
    Ok(Json(WizardView::from(&wizard)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Location
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/wizards/:id/location - Run the location probe
///
/// The body is the device's position, its error, or empty when the device
/// sent nothing.
pub async fn acquire_location(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<WizardView>, ApiError> {
    let reported = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        let position: ReportedPosition = serde_json::from_slice(&body)
            .map_err(|e| ApiError::bad_request(format!("Invalid position: {}", e)))?;
        Some(position)
    };

    let cmd = AcquireLocationCommand {
        wizard_id: parse_wizard_id(&id)?,
        reported,
    };
    let result = state.acquire_location_handler().handle(cmd).await?;
    Ok(Json(WizardView::from(&result.wizard)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Details Form
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/wizards/:id/hazard - Pick the hazard type
pub async fn select_hazard(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
    payload: Result<Json<SelectHazardRequest>, JsonRejection>,
) -> Result<Json<WizardView>, ApiError> {
    let Json(request) = payload?;
    let cmd = SelectHazardCommand {
        wizard_id: parse_wizard_id(&id)?,
        hazard_type: request.hazard_type,
    };
    let result = state.select_hazard_handler().handle(cmd).await?;
    Ok(Json(WizardView::from(&result.wizard)))
}

async fn apply_update(
    state: &WizardAppState,
    id: &str,
    update: DetailsUpdate,
) -> Result<Json<WizardView>, ApiError> {
    let cmd = UpdateDetailsCommand {
        wizard_id: parse_wizard_id(id)?,
        update,
    };
    let wizard = state.update_details_handler().handle(cmd).await?;
    Ok(Json(WizardView::from(&wizard)))
}

/// PUT /api/wizards/:id/fields/:name - Set one type-specific field
pub async fn set_field(
    State(state): State<WizardAppState>,
    Path((id, name)): Path<(String, String)>,
    payload: Result<Json<SetFieldRequest>, JsonRejection>,
) -> Result<Json<WizardView>, ApiError> {
    let Json(request) = payload?;
    let update = DetailsUpdate::SetField {
        name,
        value: request.value,
    };
    apply_update(&state, &id, update).await
}

/// PUT /api/wizards/:id/description
pub async fn set_description(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
    payload: Result<Json<SetDescriptionRequest>, JsonRejection>,
) -> Result<Json<WizardView>, ApiError> {
    let Json(request) = payload?;
    apply_update(&state, &id, DetailsUpdate::SetDescription(request.description)).await
}

/// POST /api/wizards/:id/photo - Attach an encoded photo
///
/// Bodies over `photo_body_limit` answer 413 `PAYLOAD_TOO_LARGE`.
pub async fn attach_photo(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
    payload: Result<Json<AttachPhotoRequest>, JsonRejection>,
) -> Result<Json<WizardView>, ApiError> {
    let Json(request) = payload?;
    apply_update(&state, &id, DetailsUpdate::AttachPhoto(request.data_url)).await
}

/// DELETE /api/wizards/:id/photo - Retake
pub async fn retake_photo(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    apply_update(&state, &id, DetailsUpdate::RetakePhoto).await
}

// ════════════════════════════════════════════════════════════════════════════════
// Review and Submission
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/wizards/:id/review - Freeze the draft
pub async fn proceed_to_review(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let cmd = ProceedToReviewCommand {
        wizard_id: parse_wizard_id(&id)?,
    };
    let result = state.proceed_to_review_handler().handle(cmd).await?;
    Ok(Json(WizardView::from(&result.wizard)))
}

/// GET /api/wizards/:id/review - Review summary with option labels
pub async fn get_review(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetWizardQuery {
        wizard_id: parse_wizard_id(&id)?,
    };
    let review = state.get_wizard_handler().review(query).await?;
    Ok(Json(review))
}

/// POST /api/wizards/:id/back
pub async fn go_back(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let cmd = GoBackCommand {
        wizard_id: parse_wizard_id(&id)?,
    };
    let wizard = state.go_back_handler().handle(cmd).await?;
    Ok(Json(WizardView::from(&wizard)))
}

/// POST /api/wizards/:id/submit
///
/// A failed delivery answers 502 with `retryable: true`; posting again
/// re-sends the same draft.
pub async fn submit_report(
    State(state): State<WizardAppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let cmd = SubmitReportCommand {
        wizard_id: parse_wizard_id(&id)?,
    };
    let result = state.submit_report_handler().handle(cmd).await?;
    Ok(Json(WizardView::from(&result.wizard)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Page Navigation
// ════════════════════════════════════════════════════════════════════════════════

/// Query string of a page request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub wizard: Option<String>,
}

async fn resolve_page(
    state: &WizardAppState,
    segment: Option<String>,
    query: PageQuery,
) -> Result<Response, ApiError> {
    // A malformed id cannot name a session, so it gets the same redirect as
    // an unknown one.
    let wizard_id = query.wizard.as_deref().and_then(|raw| raw.parse().ok());
    let decision = state
        .resolve_route_handler()
        .handle(ResolveRouteQuery { segment, wizard_id })
        .await?;

    Ok(match decision {
        RouteDecision::Render(route) => Json(PageResponse::from(route)).into_response(),
        RouteDecision::Redirect(to) => Redirect::to(to).into_response(),
    })
}

/// GET /report - Type selection page
pub async fn entry_page(
    State(state): State<WizardAppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    resolve_page(&state, None, query).await
}

/// GET /report/:segment - Details, review or thank-you page
pub async fn step_page(
    State(state): State<WizardAppState>,
    Path(segment): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    resolve_page(&state, Some(segment), query).await
}
