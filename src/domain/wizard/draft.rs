//! ReportDraft - the payload assembled when leaving the details step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Timestamp;
use crate::domain::hazard::{FieldValue, HazardType};
use crate::domain::location::Coordinates;
use crate::domain::photo::PhotoEvidence;

/// Answers keyed by field name. Unanswered fields are absent, never defaulted.
pub type FieldAnswers = BTreeMap<String, FieldValue>;

/// Snapshot of a finished form, captured by value.
///
/// The serialized shape is what the review renderer and submission sink
/// agree on:
/// `{hazardType, location:{lat,lng}, locationName, photo, fields, description, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub hazard_type: HazardType,
    pub location: Coordinates,
    pub location_name: String,
    pub photo: PhotoEvidence,
    pub fields: FieldAnswers,
    pub description: String,
    pub timestamp: Timestamp,
}

impl ReportDraft {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
