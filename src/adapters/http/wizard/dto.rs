//! HTTP DTOs for the report wizard endpoints.
//!
//! Request bodies carry raw JSON shapes; the wizard view flattens the
//! aggregate into what the wizard pages render.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReportId, Timestamp};
use crate::domain::hazard::{FieldValue, HazardType};
use crate::domain::location::{Coordinates, GeoFix, LocationFailure, LocationStatus};
use crate::domain::wizard::{
    Confirmation, DetailsForm, FieldAnswers, ReportDraft, ReportWizard, SubmissionState,
    WizardRoute, WizardStep,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to pick the hazard type.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectHazardRequest {
    pub hazard_type: String,
}

/// Request to set one form field.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFieldRequest {
    /// Slider position (number) or button label (string).
    pub value: FieldValue,
}

/// Request to replace the free-text description.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDescriptionRequest {
    #[serde(default)]
    pub description: String,
}

/// Request to attach a photo.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachPhotoRequest {
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Location part of the wizard view.
#[derive(Debug, Clone, Serialize)]
pub struct LocationView {
    pub status: LocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<LocationFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<&GeoFix> for LocationView {
    fn from(fix: &GeoFix) -> Self {
        let resolved = fix.resolved();
        let failure = fix.failure();
        Self {
            status: fix.status(),
            coordinates: resolved.map(|location| location.coordinates),
            place_name: resolved.map(|location| location.place_name.clone()),
            failure,
            message: failure.map(|reason| reason.user_message()),
        }
    }
}

/// The open details form.
#[derive(Debug, Clone, Serialize)]
pub struct DetailsView {
    pub hazard_type: HazardType,
    pub form_title: &'static str,
    pub location_name: String,
    pub fields: FieldAnswers,
    pub description: String,
    pub has_photo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl From<&DetailsForm> for DetailsView {
    fn from(form: &DetailsForm) -> Self {
        Self {
            hazard_type: form.hazard_type(),
            form_title: form.schema().form_title,
            location_name: form.location().place_name.clone(),
            fields: form.answers().clone(),
            description: form.description().to_string(),
            has_photo: form.photo().has_photo(),
            photo: form
                .photo()
                .evidence()
                .map(|evidence| evidence.as_data_url().to_string()),
        }
    }
}

/// Submission progress.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub attempts: u32,
    pub in_flight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl From<&SubmissionState> for SubmissionView {
    fn from(state: &SubmissionState) -> Self {
        Self {
            attempts: state.attempts,
            in_flight: state.in_flight,
            last_error: state.last_error.clone(),
        }
    }
}

/// Confirmation shown on the thank-you page.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationView {
    pub report_id: ReportId,
    pub hazard_type: HazardType,
    pub confirmed_at: Timestamp,
}

impl From<&Confirmation> for ConfirmationView {
    fn from(confirmation: &Confirmation) -> Self {
        Self {
            report_id: confirmation.report_id.clone(),
            hazard_type: confirmation.hazard_type,
            confirmed_at: confirmation.confirmed_at,
        }
    }
}

/// Full wizard view returned by every wizard endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub wizard_id: String,
    pub step: WizardStep,
    pub step_number: u8,
    /// Page that shows the session in its current step.
    pub page: String,
    pub location: LocationView,
    pub can_select_hazard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<ReportDraft>,
    pub submission: SubmissionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<ConfirmationView>,
    pub updated_at: Timestamp,
}

impl From<&ReportWizard> for WizardView {
    fn from(wizard: &ReportWizard) -> Self {
        Self {
            wizard_id: wizard.id().to_string(),
            step: wizard.step(),
            step_number: wizard.step().step_number(),
            page: WizardRoute::for_wizard(wizard).path(),
            location: LocationView::from(wizard.probe().fix()),
            can_select_hazard: wizard.can_select_hazard(),
            details: wizard.details().map(DetailsView::from),
            draft: wizard.draft().cloned(),
            submission: SubmissionView::from(wizard.submission()),
            confirmation: wizard.confirmation().map(ConfirmationView::from),
            updated_at: *wizard.updated_at(),
        }
    }
}

/// Rendered page for the navigation surface.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub route: WizardRoute,
    pub path: String,
}

impl From<WizardRoute> for PageResponse {
    fn from(route: WizardRoute) -> Self {
        Self {
            path: route.path(),
            route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::WizardId;

    #[test]
    fn set_field_request_accepts_position_or_label() {
        let position: SetFieldRequest = serde_json::from_str(r#"{"value": 2}"#).unwrap();
        assert_eq!(position.value, FieldValue::Position(2));

        let label: SetFieldRequest = serde_json::from_str(r#"{"value": "Black"}"#).unwrap();
        assert_eq!(label.value, FieldValue::choice("Black"));
    }

    #[test]
    fn description_defaults_to_empty() {
        let request: SetDescriptionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.description, "");
    }

    #[test]
    fn fresh_wizard_view_is_pending_on_selection_page() {
        let mut wizard = ReportWizard::new(WizardId::new());
        wizard.activate_location().unwrap();

        let json = serde_json::to_value(WizardView::from(&wizard)).unwrap();
        assert_eq!(json["step"], "selecting_type");
        assert_eq!(json["page"], "/report");
        assert_eq!(json["location"]["status"], "pending");
        assert_eq!(json["can_select_hazard"], false);
        assert!(json.get("details").is_none());
        assert!(json.get("confirmation").is_none());
    }

    #[test]
    fn failed_location_carries_user_message() {
        let mut wizard = ReportWizard::new(WizardId::new());
        let ticket = wizard.activate_location().unwrap();
        wizard.complete_location(ticket, Err(LocationFailure::PermissionDenied));

        let view = WizardView::from(&wizard);
        assert_eq!(view.location.failure, Some(LocationFailure::PermissionDenied));
        assert_eq!(view.location.message, Some("Location access denied"));
    }
}
