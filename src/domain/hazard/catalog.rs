//! Static hazard catalog: per-type form schema.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{CatalogError, FieldDefinition, HazardType};

/// Ordered field schema for one hazard type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub hazard_type: HazardType,
    pub form_title: &'static str,
    pub fields: Vec<FieldDefinition>,
}

impl FieldSchema {
    /// Looks up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// Registry of every hazard type's schema.
///
/// Pure data: lookups never mutate and never perform I/O.
#[derive(Debug)]
pub struct HazardCatalog {
    schemas: Vec<FieldSchema>,
}

static STANDARD: Lazy<HazardCatalog> = Lazy::new(HazardCatalog::build_standard);

impl HazardCatalog {
    /// The built-in catalog.
    pub fn standard() -> &'static HazardCatalog {
        &STANDARD
    }

    /// Schema for a hazard type.
    ///
    /// # Errors
    ///
    /// - `CatalogError::NotFound` if the type has no registered schema
    pub fn schema_for(&self, hazard_type: HazardType) -> Result<&FieldSchema, CatalogError> {
        self.schemas
            .iter()
            .find(|s| s.hazard_type == hazard_type)
            .ok_or(CatalogError::NotFound(hazard_type))
    }

    /// Schema for a raw slug, as received from a route or request body.
    pub fn schema_for_slug(&self, slug: &str) -> Result<&FieldSchema, CatalogError> {
        let hazard_type: HazardType = slug.parse()?;
        self.schema_for(hazard_type)
    }

    /// All schemas in selection-grid order.
    pub fn schemas(&self) -> &[FieldSchema] {
        &self.schemas
    }

    fn build_standard() -> Self {
        let schemas = vec![
            FieldSchema {
                hazard_type: HazardType::OilSpill,
                form_title: "Oil Spill Report",
                fields: vec![
                    FieldDefinition::ranged_scale(
                        "size",
                        "Size of Oil Spill",
                        &["Sheen", "Small Slick", "Large Patch", "Major Spill"],
                    ),
                    FieldDefinition::discrete_choice(
                        "color",
                        "Oil Color",
                        &["Rainbow", "Black", "Brown", "Silver/Gray"],
                    ),
                ],
            },
            FieldSchema {
                hazard_type: HazardType::MarineDebris,
                form_title: "Marine Debris Report",
                fields: vec![
                    FieldDefinition::discrete_choice(
                        "type",
                        "Debris Type",
                        &["Plastic Bottles", "Fishing Gear", "Large Objects", "Debris Field"],
                    ),
                    FieldDefinition::ranged_scale(
                        "amount",
                        "Amount of Debris",
                        &["Few Items", "Multiple Items", "Large Amount", "Massive Field"],
                    ),
                ],
            },
            FieldSchema {
                hazard_type: HazardType::StormWaves,
                form_title: "Storm/Wave Report",
                fields: vec![
                    FieldDefinition::ranged_scale(
                        "severity",
                        "Wave Severity",
                        &["Moderate", "High", "Dangerous", "Extreme"],
                    ),
                    FieldDefinition::discrete_choice(
                        "conditions",
                        "Conditions",
                        &["Strong Winds", "Large Swells", "Storm Surge", "Dangerous Currents"],
                    ),
                ],
            },
            FieldSchema {
                hazard_type: HazardType::InjuredAnimal,
                form_title: "Marine Life Report",
                fields: vec![
                    FieldDefinition::discrete_choice(
                        "animalType",
                        "Animal Type",
                        &["Seal/Sea Lion", "Whale/Dolphin", "Sea Bird", "Fish/Other"],
                    ),
                    FieldDefinition::discrete_choice(
                        "condition",
                        "Condition",
                        &["Injured", "Entangled", "Stranded", "Dead"],
                    ),
                ],
            },
            FieldSchema {
                hazard_type: HazardType::WaterQuality,
                form_title: "Water Quality Report",
                fields: vec![
                    FieldDefinition::discrete_choice(
                        "issue",
                        "Water Quality Issue",
                        &["Discoloration", "Algae Bloom", "Foam/Scum", "Strong Odor"],
                    ),
                    FieldDefinition::ranged_scale(
                        "severity",
                        "Severity",
                        &["Mild", "Moderate", "Severe", "Extreme"],
                    ),
                ],
            },
            FieldSchema {
                hazard_type: HazardType::Other,
                form_title: "Other Hazard Report",
                fields: vec![FieldDefinition::discrete_choice(
                    "category",
                    "General Category",
                    &["Navigation Hazard", "Pollution", "Safety Concern", "Unknown"],
                )],
            },
        ];

        Self { schemas }
    }
}
