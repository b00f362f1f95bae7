//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router; [`app_router`] combines them into the
//! service router that `main` serves.

pub mod error;
pub mod hazards;
pub mod reports;
pub mod wizard;

use axum::Router;

pub use error::{ApiError, ErrorResponse};
pub use hazards::hazards_router;
pub use reports::{reports_router, ReportsAppState};
pub use wizard::{wizard_router, WizardAppState};

/// The full API: wizard sessions, page navigation, catalog and reports.
pub fn app_router(wizard_state: WizardAppState, reports_state: ReportsAppState) -> Router {
    Router::new()
        .merge(wizard_router(wizard_state.photo_body_limit).with_state(wizard_state))
        .merge(reports_router().with_state(reports_state))
        .merge(hazards_router())
}
