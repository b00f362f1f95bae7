//! ReviewSummary - what the review screen shows for a draft.

use serde::Serialize;

use super::ReportDraft;
use crate::domain::hazard::{FieldSchema, HazardType};

/// One answered field, resolved to the text the reporter picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDetail {
    pub field: String,
    pub label: String,
    pub value: String,
}

/// Read-only rendering of a draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub hazard_type: HazardType,
    pub hazard_label: String,
    pub photo: String,
    pub location_name: String,
    pub coordinates: String,
    pub timestamp: String,
    pub details: Vec<ReviewDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ReviewSummary {
    /// Renders `draft` using `schema` for labels and option text.
    ///
    /// Details follow the schema's field order. Scale positions are shown as
    /// their option label; unanswered fields are left out.
    pub fn render(draft: &ReportDraft, schema: &FieldSchema) -> Self {
        let details = schema
            .fields
            .iter()
            .filter_map(|definition| {
                let value = draft.field(definition.name)?;
                let shown = definition
                    .display(value)
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string());
                Some(ReviewDetail {
                    field: definition.name.to_string(),
                    label: definition.label.to_string(),
                    value: shown,
                })
            })
            .collect();

        let description = if draft.description.trim().is_empty() {
            None
        } else {
            Some(draft.description.clone())
        };

        Self {
            hazard_type: draft.hazard_type,
            hazard_label: draft.hazard_type.review_label().to_string(),
            photo: draft.photo.as_data_url().to_string(),
            location_name: draft.location_name.clone(),
            coordinates: draft.location.display_fixed(),
            timestamp: draft.timestamp.to_rfc3339(),
            details,
            description,
        }
    }

    /// Displayed value for a field, if it was answered.
    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.field == field)
            .map(|d| d.value.as_str())
    }
}
