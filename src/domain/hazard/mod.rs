//! Hazard domain module.
//!
//! The fixed set of hazard categories and the form schema each one uses.

mod catalog;
mod field;
mod hazard_type;

pub use catalog::{FieldSchema, HazardCatalog};
pub use field::{FieldDefinition, FieldKind, FieldValue};
pub use hazard_type::HazardType;

use thiserror::Error;

/// Catalog lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown hazard type: {0}")]
    UnknownHazardType(String),

    #[error("No field schema registered for {0}")]
    NotFound(HazardType),
}
