//! HTTP adapter for the report wizard.
//!
//! Exposes wizard sessions via REST API:
//! - `POST /api/wizards` - Start a session
//! - `GET /api/wizards/:id` - Current state
//! - `POST /api/wizards/:id/location` - Run the location probe
//! - `POST /api/wizards/:id/hazard` - Pick the hazard type
//! - `PUT /api/wizards/:id/fields/:name`, `PUT /api/wizards/:id/description`
//! - `POST|DELETE /api/wizards/:id/photo`
//! - `POST /api/wizards/:id/{review,back,submit,abandon}`
//! - `GET /api/wizards/:id/review` - Review summary
//!
//! and the page navigation surface (`GET /report`, `GET /report/:segment`).

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::WizardAppState;
pub use routes::{page_routes, wizard_router, wizard_routes};
