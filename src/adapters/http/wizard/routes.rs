//! Axum router configuration for the report wizard.
//!
//! This module defines the route structure for wizard API endpoints and the
//! page navigation surface, and wires them to their handlers.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    abandon_wizard, acquire_location, attach_photo, entry_page, get_review, get_wizard, go_back,
    proceed_to_review, retake_photo, select_hazard, set_description, set_field, start_wizard,
    step_page, submit_report, WizardAppState,
};

/// Create the wizard API router.
///
/// # Routes
///
/// - `POST /` - Start a session
/// - `GET /:id` - Current state
/// - `POST /:id/location` - Run the location probe
/// - `POST /:id/hazard` - Pick the hazard type
/// - `PUT /:id/fields/:name` - Set a type-specific field
/// - `PUT /:id/description` - Set the description
/// - `POST /:id/photo` / `DELETE /:id/photo` - Attach or retake the photo
/// - `POST /:id/review`, `GET /:id/review` - Freeze the draft, read the summary
/// - `POST /:id/back` - One step back
/// - `POST /:id/submit` - Submit (or retry) the draft
/// - `POST /:id/abandon` - Discard the report
///
/// The photo route accepts bodies up to `photo_body_limit` bytes; every other
/// route keeps axum's default limit.
pub fn wizard_routes(photo_body_limit: usize) -> Router<WizardAppState> {
    Router::new()
        .route("/", post(start_wizard))
        .route("/:id", get(get_wizard))
        .route("/:id/location", post(acquire_location))
        .route("/:id/hazard", post(select_hazard))
        .route("/:id/fields/:name", put(set_field))
        .route("/:id/description", put(set_description))
        .route(
            "/:id/photo",
            post(attach_photo)
                .delete(retake_photo)
                .layer(DefaultBodyLimit::max(photo_body_limit)),
        )
        .route("/:id/review", post(proceed_to_review).get(get_review))
        .route("/:id/back", post(go_back))
        .route("/:id/submit", post(submit_report))
        .route("/:id/abandon", post(abandon_wizard))
}

/// Create the page navigation router.
///
/// # Routes
///
/// - `GET /report` - Type selection
/// - `GET /report/:segment` - Details (`/report/oil-spill`), `review` or
///   `thank-you`; redirects to `/report` when the session cannot show it
pub fn page_routes() -> Router<WizardAppState> {
    Router::new()
        .route("/report", get(entry_page))
        .route("/report/:segment", get(step_page))
}

/// Create the complete wizard module router.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .merge(wizard_router(wizard_state.photo_body_limit))
///     .with_state(wizard_state);
/// ```
pub fn wizard_router(photo_body_limit: usize) -> Router<WizardAppState> {
    Router::new()
        .nest("/api/wizards", wizard_routes(photo_body_limit))
        .merge(page_routes())
}
