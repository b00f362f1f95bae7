//! HTTP adapter for the hazard catalog.
//!
//! - `GET /api/hazards` - Every hazard type with its form schema
//! - `GET /api/hazards/:slug` - One hazard type

use axum::extract::{Json, Path};
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::error::ApiError;
use crate::domain::hazard::{FieldDefinition, FieldSchema, HazardCatalog, HazardType};

/// One tile of the selection grid plus the form it opens.
#[derive(Debug, Clone, Serialize)]
pub struct HazardTypeResponse {
    pub hazard_type: HazardType,
    pub title: &'static str,
    pub review_label: &'static str,
    pub description: &'static str,
    pub examples: &'static str,
    pub form_title: &'static str,
    pub fields: Vec<FieldDefinition>,
}

impl From<&FieldSchema> for HazardTypeResponse {
    fn from(schema: &FieldSchema) -> Self {
        let hazard_type = schema.hazard_type;
        Self {
            hazard_type,
            title: hazard_type.title(),
            review_label: hazard_type.review_label(),
            description: hazard_type.description(),
            examples: hazard_type.examples(),
            form_title: schema.form_title,
            fields: schema.fields.clone(),
        }
    }
}

/// GET /api/hazards
pub async fn list_hazards() -> Json<Vec<HazardTypeResponse>> {
    let hazards = HazardCatalog::standard()
        .schemas()
        .iter()
        .map(HazardTypeResponse::from)
        .collect();
    Json(hazards)
}

/// GET /api/hazards/:slug
pub async fn get_hazard(Path(slug): Path<String>) -> Result<Json<HazardTypeResponse>, ApiError> {
    let schema = HazardCatalog::standard()
        .schema_for_slug(&slug)
        .map_err(|e| ApiError::not_found(e.to_string()))?;
    Ok(Json(HazardTypeResponse::from(schema)))
}

/// Create the catalog router. It needs no state.
pub fn hazards_router() -> Router {
    Router::new()
        .route("/api/hazards", get(list_hazards))
        .route("/api/hazards/:slug", get(get_hazard))
}
