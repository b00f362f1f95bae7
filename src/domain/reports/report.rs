//! HazardReport - a submitted report as stored and listed.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReportId, Timestamp};
use crate::domain::hazard::HazardType;
use crate::domain::location::Coordinates;
use crate::domain::photo::PhotoEvidence;
use crate::domain::wizard::{FieldAnswers, ReportDraft};

/// A report accepted by the submission sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardReport {
    pub id: ReportId,
    pub hazard_type: HazardType,
    pub location: Coordinates,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoEvidence>,
    #[serde(default)]
    pub fields: FieldAnswers,
    #[serde(default)]
    pub description: String,
    pub reported_at: Timestamp,
}

impl HazardReport {
    /// Builds the stored record for an accepted draft.
    pub fn from_draft(id: ReportId, draft: &ReportDraft) -> Self {
        Self {
            id,
            hazard_type: draft.hazard_type,
            location: draft.location,
            location_name: draft.location_name.clone(),
            photo: Some(draft.photo.clone()),
            fields: draft.fields.clone(),
            description: draft.description.clone(),
            reported_at: draft.timestamp,
        }
    }

    /// Heading used in report lists.
    pub fn title(&self) -> &'static str {
        self.hazard_type.review_label()
    }
}
