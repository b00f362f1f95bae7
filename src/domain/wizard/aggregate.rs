//! ReportWizard aggregate - the only mutator of a reporting session.
//!
//! # Flow
//!
//! `SelectingType -> FillingDetails -> Reviewing -> Submitting -> Confirmed`
//!
//! - Leaving `SelectingType` needs a resolved location.
//! - Leaving `FillingDetails` needs a photo; the draft is stamped then.
//! - `Reviewing -> FillingDetails` keeps every answer already given.
//! - Any step can be abandoned back to `SelectingType`, discarding the draft.

use std::time::Duration;

use super::{FieldAnswers, ReportDraft, ReviewSummary, WizardError, WizardStep};
use crate::domain::foundation::{ReportId, StateMachine, Timestamp, WizardId};
use crate::domain::hazard::{FieldSchema, FieldValue, HazardCatalog, HazardType};
use crate::domain::location::{
    LocationFailure, LocationProbe, LocationStatus, ProbeOutcome, ProbeTicket, ResolvedLocation,
};
use crate::domain::photo::{CaptureOutcome, PhotoCapture, PhotoEvidence, SelectedImage};

/// Form state while the reporter fills in details.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsForm {
    schema: FieldSchema,
    location: ResolvedLocation,
    answers: FieldAnswers,
    description: String,
    photo: PhotoCapture,
}

impl DetailsForm {
    pub fn hazard_type(&self) -> HazardType {
        self.schema.hazard_type
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn location(&self) -> &ResolvedLocation {
        &self.location
    }

    pub fn answers(&self) -> &FieldAnswers {
        &self.answers
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn photo(&self) -> &PhotoCapture {
        &self.photo
    }
}

/// How long an attempt may stay in flight before another one can replace it.
pub const DEFAULT_ATTEMPT_LEASE: Duration = Duration::from_secs(60);

/// Submission bookkeeping while in `Submitting`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub attempts: u32,
    pub in_flight: bool,
    /// End of the current attempt's lease; set while `in_flight`.
    pub lease_expires_at: Option<Timestamp>,
    pub last_error: Option<String>,
}

impl SubmissionState {
    fn holds_lease(&self, now: &Timestamp) -> bool {
        self.in_flight
            && self
                .lease_expires_at
                .map_or(false, |expires| now.is_before(&expires))
    }
}

/// One claimed delivery of the frozen draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionAttempt {
    /// 1-based; only the latest attempt may record an outcome.
    pub number: u32,
    pub draft: ReportDraft,
}

/// Receipt for a confirmed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub report_id: ReportId,
    pub hazard_type: HazardType,
    pub confirmed_at: Timestamp,
}

/// One reporter's session through the report flow.
///
/// # Invariants
///
/// - `details` is present in `FillingDetails`, `Reviewing` and `Submitting`
/// - `draft` is present exactly in `Reviewing` and `Submitting`
/// - `confirmation` is present exactly in `Confirmed`
/// - `version` only changes when a repository accepts a save
#[derive(Debug, Clone, PartialEq)]
pub struct ReportWizard {
    id: WizardId,
    version: u64,
    step: WizardStep,
    probe: LocationProbe,
    details: Option<DetailsForm>,
    draft: Option<ReportDraft>,
    submission: SubmissionState,
    confirmation: Option<Confirmation>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ReportWizard {
    /// Starts a session on the type selection screen.
    pub fn new(id: WizardId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            version: 0,
            step: WizardStep::SelectingType,
            probe: LocationProbe::new(),
            details: None,
            draft: None,
            submission: SubmissionState::default(),
            confirmation: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &WizardId {
        &self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Stored revision, used for optimistic locking.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Advances the revision. Repositories call this on the copy they store.
    pub fn increment_version(&mut self) {
        self.version = self.version.saturating_add(1);
    }

    pub fn probe(&self) -> &LocationProbe {
        &self.probe
    }

    pub fn location_status(&self) -> LocationStatus {
        self.probe.status()
    }

    /// Hazard cards are only clickable with a resolved location.
    pub fn can_select_hazard(&self) -> bool {
        self.step == WizardStep::SelectingType && self.probe.fix().is_resolved()
    }

    pub fn details(&self) -> Option<&DetailsForm> {
        self.details.as_ref()
    }

    pub fn draft(&self) -> Option<&ReportDraft> {
        self.draft.as_ref()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Step 1: location and type selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a new position request. Results of earlier requests become stale.
    pub fn activate_location(&mut self) -> Result<ProbeTicket, WizardError> {
        self.ensure_step(WizardStep::SelectingType)?;
        let ticket = self.probe.activate();
        self.touch();
        Ok(ticket)
    }

    /// Applies a position result if `ticket` is still the current request.
    pub fn complete_location(
        &mut self,
        ticket: ProbeTicket,
        result: Result<ResolvedLocation, LocationFailure>,
    ) -> ProbeOutcome {
        let outcome = self.probe.complete(ticket, result);
        if matches!(outcome, ProbeOutcome::Applied(_)) {
            self.touch();
        }
        outcome
    }

    /// `SelectingType -> FillingDetails`.
    ///
    /// # Errors
    ///
    /// - `LocationUnavailable` / `LocationPending` unless the fix is resolved
    /// - `UnknownHazardType` if the catalog has no schema for the type
    pub fn select_hazard(
        &mut self,
        catalog: &HazardCatalog,
        hazard_type: HazardType,
    ) -> Result<&FieldSchema, WizardError> {
        self.ensure_step(WizardStep::SelectingType)?;

        let location = match self.probe.fix().resolved() {
            Some(location) => location.clone(),
            None => {
                return Err(match self.probe.fix().failure() {
                    Some(reason) => WizardError::LocationUnavailable(reason),
                    None => WizardError::LocationPending,
                })
            }
        };

        let schema = catalog.schema_for(hazard_type)?.clone();
        self.transition(WizardStep::FillingDetails)?;
        self.details = Some(DetailsForm {
            schema,
            location,
            answers: FieldAnswers::new(),
            description: String::new(),
            photo: PhotoCapture::new(),
        });

        Ok(&self.details_mut()?.schema)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Step 2: details
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets one field; a new value replaces the previous one.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if the schema does not declare `name`
    /// - `InvalidFieldValue` if `value` is not one of the field's options
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
        let form = self.editable_form()?;
        let definition = form
            .schema
            .field(name)
            .ok_or_else(|| WizardError::UnknownField {
                hazard_type: form.schema.hazard_type,
                field: name.to_string(),
            })?;
        definition.validate(&value)?;
        form.answers.insert(name.to_string(), value);
        self.touch();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), WizardError> {
        self.editable_form()?.description = description.into();
        self.touch();
        Ok(())
    }

    /// Feeds a picker result into the photo slot. `None` is a cancelled picker.
    pub fn capture_photo(
        &mut self,
        selection: Option<SelectedImage>,
    ) -> Result<CaptureOutcome, WizardError> {
        let outcome = self.editable_form()?.photo.capture(selection)?;
        if outcome == CaptureOutcome::Captured {
            self.touch();
        }
        Ok(outcome)
    }

    /// Stores a photo that arrived already encoded.
    pub fn attach_photo(&mut self, evidence: PhotoEvidence) -> Result<(), WizardError> {
        self.editable_form()?.photo.attach(evidence);
        self.touch();
        Ok(())
    }

    pub fn retake_photo(&mut self) -> Result<(), WizardError> {
        self.editable_form()?.photo.retake();
        self.touch();
        Ok(())
    }

    /// `FillingDetails -> Reviewing`. Stamps the draft with the current time.
    ///
    /// # Errors
    ///
    /// - `MissingPhoto` if no photo has been captured
    pub fn proceed_to_review(&mut self) -> Result<&ReportDraft, WizardError> {
        let form = self.editable_form()?;
        let photo = form
            .photo
            .evidence()
            .cloned()
            .ok_or(WizardError::MissingPhoto)?;

        let draft = ReportDraft {
            hazard_type: form.schema.hazard_type,
            location: form.location.coordinates,
            location_name: form.location.place_name.clone(),
            photo,
            fields: form.answers.clone(),
            description: form.description.clone(),
            timestamp: Timestamp::now(),
        };

        self.transition(WizardStep::Reviewing)?;
        Ok(&*self.draft.insert(draft))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Step 3: review and submission
    // ─────────────────────────────────────────────────────────────────────────

    /// Review rendering of the current draft.
    pub fn review(&self) -> Result<ReviewSummary, WizardError> {
        match (&self.draft, &self.details) {
            (Some(draft), Some(form)) => Ok(ReviewSummary::render(draft, &form.schema)),
            _ => Err(WizardError::WrongStep(self.step)),
        }
    }

    /// Back navigation.
    ///
    /// From review this returns to the form with every answer intact; from
    /// the form it returns to type selection, discarding the form.
    pub fn go_back(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Reviewing => {
                self.transition(WizardStep::FillingDetails)?;
                self.draft = None;
                Ok(self.step)
            }
            WizardStep::FillingDetails => {
                self.abandon();
                Ok(self.step)
            }
            other => Err(WizardError::WrongStep(other)),
        }
    }

    /// Freezes the draft and claims a delivery attempt leased until `now + lease`.
    ///
    /// Called from `Reviewing` for the first attempt and from `Submitting`
    /// after a failed attempt or once the previous lease has run out.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress` if another attempt still holds its lease
    pub fn begin_submission(
        &mut self,
        now: Timestamp,
        lease: Duration,
    ) -> Result<SubmissionAttempt, WizardError> {
        match self.step {
            WizardStep::Reviewing => {
                self.transition(WizardStep::Submitting)?;
            }
            WizardStep::Submitting if self.submission.holds_lease(&now) => {
                return Err(WizardError::SubmissionInProgress);
            }
            WizardStep::Submitting => {}
            other => return Err(WizardError::WrongStep(other)),
        }

        let draft = self
            .draft
            .clone()
            .ok_or(WizardError::WrongStep(self.step))?;
        let lease_ms = i64::try_from(lease.as_millis()).unwrap_or(i64::MAX);
        self.submission.attempts += 1;
        self.submission.in_flight = true;
        self.submission.lease_expires_at = Some(now.plus_millis(lease_ms));
        self.touch();
        Ok(SubmissionAttempt {
            number: self.submission.attempts,
            draft,
        })
    }

    /// True while `attempt` is the in-flight attempt of this session.
    ///
    /// False once the session was abandoned, confirmed or taken over.
    pub fn is_current_attempt(&self, attempt: u32) -> bool {
        self.step == WizardStep::Submitting
            && self.submission.in_flight
            && self.submission.attempts == attempt
    }

    /// Records a failed delivery. The session stays in `Submitting`.
    ///
    /// Outcomes of superseded attempts leave the session untouched.
    pub fn record_submission_failure(
        &mut self,
        attempt: u32,
        message: impl Into<String>,
    ) -> WizardError {
        let message = message.into();
        if self.is_current_attempt(attempt) {
            self.submission.in_flight = false;
            self.submission.lease_expires_at = None;
            self.submission.last_error = Some(message.clone());
            self.touch();
        }
        WizardError::SubmissionFailed {
            attempts: attempt,
            message,
        }
    }

    /// `Submitting -> Confirmed`. The draft is consumed.
    pub fn confirm_submission(
        &mut self,
        attempt: u32,
        report_id: ReportId,
    ) -> Result<&Confirmation, WizardError> {
        if !self.is_current_attempt(attempt) {
            return Err(WizardError::WrongStep(self.step));
        }
        let hazard_type = self
            .draft
            .as_ref()
            .map(|d| d.hazard_type)
            .ok_or(WizardError::WrongStep(self.step))?;

        self.transition(WizardStep::Confirmed)?;
        self.draft = None;
        self.details = None;
        self.submission = SubmissionState::default();
        Ok(&*self.confirmation.insert(Confirmation {
            report_id,
            hazard_type,
            confirmed_at: Timestamp::now(),
        }))
    }

    /// Returns to type selection from anywhere, discarding the draft.
    ///
    /// The location fix is kept so another report can start right away.
    pub fn abandon(&mut self) {
        self.step = WizardStep::SelectingType;
        self.details = None;
        self.draft = None;
        self.submission = SubmissionState::default();
        self.confirmation = None;
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep(self.step))
        }
    }

    fn transition(&mut self, target: WizardStep) -> Result<(), WizardError> {
        self.step = self
            .step
            .transition_to(target)
            .map_err(|_| WizardError::InvalidTransition {
                from: self.step,
                to: target,
            })?;
        self.touch();
        Ok(())
    }

    fn editable_form(&mut self) -> Result<&mut DetailsForm, WizardError> {
        if self.step.has_frozen_draft() {
            return Err(WizardError::DraftFrozen);
        }
        if !self.step.accepts_edits() {
            return Err(WizardError::WrongStep(self.step));
        }
        self.details_mut()
    }

    fn details_mut(&mut self) -> Result<&mut DetailsForm, WizardError> {
        let step = self.step;
        self.details.as_mut().ok_or(WizardError::WrongStep(step))
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::Coordinates;

    fn santa_monica() -> ResolvedLocation {
        ResolvedLocation::new(
            Coordinates::new(34.0194, -118.4912).unwrap(),
            "Santa Monica, CA",
        )
    }

    fn beach_photo() -> SelectedImage {
        SelectedImage {
            file_name: "beach.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    fn located_wizard() -> ReportWizard {
        let mut wizard = ReportWizard::new(WizardId::new());
        let ticket = wizard.activate_location().unwrap();
        wizard.complete_location(ticket, Ok(santa_monica()));
        wizard
    }

    fn wizard_at_details(hazard: HazardType) -> ReportWizard {
        let mut wizard = located_wizard();
        wizard
            .select_hazard(HazardCatalog::standard(), hazard)
            .unwrap();
        wizard
    }

    fn wizard_at_review() -> ReportWizard {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        wizard.set_field("size", FieldValue::Position(1)).unwrap();
        wizard.capture_photo(Some(beach_photo())).unwrap();
        wizard.proceed_to_review().unwrap();
        wizard
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_wizard_starts_selecting_with_pending_location() {
        let wizard = ReportWizard::new(WizardId::new());
        assert_eq!(wizard.step(), WizardStep::SelectingType);
        assert_eq!(wizard.location_status(), LocationStatus::Pending);
        assert!(!wizard.can_select_hazard());
    }

    #[test]
    fn failed_location_blocks_every_hazard_type() {
        let mut wizard = ReportWizard::new(WizardId::new());
        let ticket = wizard.activate_location().unwrap();
        wizard.complete_location(ticket, Err(LocationFailure::PermissionDenied));

        assert!(!wizard.can_select_hazard());
        for hazard in HazardType::ALL {
            let err = wizard
                .select_hazard(HazardCatalog::standard(), hazard)
                .unwrap_err();
            assert_eq!(
                err,
                WizardError::LocationUnavailable(LocationFailure::PermissionDenied)
            );
        }
        assert_eq!(wizard.step(), WizardStep::SelectingType);
    }

    #[test]
    fn pending_location_blocks_selection() {
        let mut wizard = ReportWizard::new(WizardId::new());
        wizard.activate_location().unwrap();

        let err = wizard
            .select_hazard(HazardCatalog::standard(), HazardType::Other)
            .unwrap_err();
        assert_eq!(err, WizardError::LocationPending);
    }

    #[test]
    fn selecting_a_type_opens_an_empty_form() {
        let wizard = wizard_at_details(HazardType::WaterQuality);

        let form = wizard.details().unwrap();
        assert_eq!(wizard.step(), WizardStep::FillingDetails);
        assert_eq!(form.hazard_type(), HazardType::WaterQuality);
        assert!(form.answers().is_empty());
        assert_eq!(form.location().place_name, "Santa Monica, CA");
    }

    #[test]
    fn location_cannot_be_reacquired_once_past_selection() {
        let mut wizard = wizard_at_details(HazardType::Other);
        assert!(wizard.activate_location().is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Details
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn choosing_a_new_button_replaces_the_old_value() {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        wizard.set_field("color", FieldValue::choice("Rainbow")).unwrap();
        wizard.set_field("color", FieldValue::choice("Black")).unwrap();

        let answers = wizard.details().unwrap().answers();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("color"), Some(&FieldValue::choice("Black")));
    }

    #[test]
    fn invalid_value_leaves_previous_answer_in_place() {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        wizard.set_field("size", FieldValue::Position(2)).unwrap();

        let err = wizard.set_field("size", FieldValue::Position(9)).unwrap_err();

        assert!(matches!(err, WizardError::InvalidFieldValue(_)));
        assert_eq!(
            wizard.details().unwrap().answers().get("size"),
            Some(&FieldValue::Position(2))
        );
    }

    #[test]
    fn fields_from_other_hazard_types_are_rejected() {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        let err = wizard
            .set_field("animalType", FieldValue::choice("Sea Bird"))
            .unwrap_err();
        assert!(matches!(err, WizardError::UnknownField { .. }));
    }

    #[test]
    fn review_is_blocked_without_photo() {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        assert_eq!(wizard.proceed_to_review().unwrap_err(), WizardError::MissingPhoto);
        assert_eq!(wizard.step(), WizardStep::FillingDetails);
    }

    #[test]
    fn retaken_photo_blocks_review_again() {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        wizard.capture_photo(Some(beach_photo())).unwrap();
        wizard.retake_photo().unwrap();

        assert_eq!(wizard.proceed_to_review().unwrap_err(), WizardError::MissingPhoto);
    }

    #[test]
    fn draft_timestamp_is_taken_at_the_review_transition() {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        wizard.capture_photo(Some(beach_photo())).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));

        let before = Timestamp::now();
        let stamped = wizard.proceed_to_review().unwrap().timestamp;
        let after = Timestamp::now();

        assert!(!stamped.is_before(&before));
        assert!(!stamped.is_after(&after));
        assert!(stamped.is_after(wizard.created_at()));
    }

    #[test]
    fn unanswered_fields_are_absent_from_the_draft() {
        let wizard = wizard_at_review();
        let draft = wizard.draft().unwrap();
        assert_eq!(draft.fields.len(), 1);
        assert!(draft.field("color").is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Review and back navigation
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn review_is_read_only() {
        let mut wizard = wizard_at_review();
        let err = wizard
            .set_field("color", FieldValue::choice("Black"))
            .unwrap_err();
        assert_eq!(err, WizardError::DraftFrozen);
    }

    #[test]
    fn going_back_from_review_keeps_answers() {
        let mut wizard = wizard_at_review();

        assert_eq!(wizard.go_back().unwrap(), WizardStep::FillingDetails);

        let form = wizard.details().unwrap();
        assert_eq!(form.answers().get("size"), Some(&FieldValue::Position(1)));
        assert!(form.photo().has_photo());
        assert!(wizard.draft().is_none());
    }

    #[test]
    fn going_back_from_details_abandons_the_form() {
        let mut wizard = wizard_at_details(HazardType::OilSpill);
        assert_eq!(wizard.go_back().unwrap(), WizardStep::SelectingType);
        assert!(wizard.details().is_none());
        assert!(wizard.can_select_hazard());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    fn begin(wizard: &mut ReportWizard) -> SubmissionAttempt {
        wizard
            .begin_submission(Timestamp::now(), DEFAULT_ATTEMPT_LEASE)
            .unwrap()
    }

    #[test]
    fn submission_freezes_then_confirms() {
        let mut wizard = wizard_at_review();

        let attempt = begin(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::Submitting);
        assert_eq!(attempt.number, 1);
        assert_eq!(attempt.draft.hazard_type, HazardType::OilSpill);

        let id = ReportId::generate();
        wizard.confirm_submission(attempt.number, id.clone()).unwrap();

        assert_eq!(wizard.step(), WizardStep::Confirmed);
        assert_eq!(wizard.confirmation().unwrap().report_id, id);
        assert!(wizard.draft().is_none());
        assert!(wizard.details().is_none());
    }

    #[test]
    fn concurrent_submission_is_rejected() {
        let mut wizard = wizard_at_review();
        begin(&mut wizard);
        assert_eq!(
            wizard
                .begin_submission(Timestamp::now(), DEFAULT_ATTEMPT_LEASE)
                .unwrap_err(),
            WizardError::SubmissionInProgress
        );
    }

    #[test]
    fn expired_attempt_can_be_replaced() {
        let mut wizard = wizard_at_review();
        let started = Timestamp::now();
        let lease = Duration::from_secs(30);
        let first = wizard.begin_submission(started, lease).unwrap();

        assert_eq!(
            wizard
                .begin_submission(started.plus_millis(29_000), lease)
                .unwrap_err(),
            WizardError::SubmissionInProgress
        );

        let second = wizard
            .begin_submission(started.plus_millis(30_000), lease)
            .unwrap();
        assert_eq!(second.number, 2);
        assert_eq!(second.draft, first.draft);
        assert!(!wizard.is_current_attempt(first.number));
        assert!(wizard.is_current_attempt(second.number));
    }

    #[test]
    fn superseded_attempt_cannot_record_an_outcome() {
        let mut wizard = wizard_at_review();
        let started = Timestamp::now();
        let first = wizard.begin_submission(started, Duration::ZERO).unwrap();
        let second = wizard
            .begin_submission(started.plus_millis(1), DEFAULT_ATTEMPT_LEASE)
            .unwrap();

        assert!(wizard
            .confirm_submission(first.number, ReportId::generate())
            .is_err());
        wizard.record_submission_failure(first.number, "late failure");
        assert!(wizard.submission().in_flight);
        assert!(wizard.submission().last_error.is_none());

        wizard
            .confirm_submission(second.number, ReportId::generate())
            .unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirmed);
    }

    #[test]
    fn failed_submission_stays_submitting_and_can_retry() {
        let mut wizard = wizard_at_review();
        let first = begin(&mut wizard);

        let err = wizard.record_submission_failure(first.number, "sink unavailable");
        assert!(err.is_retryable());
        assert_eq!(wizard.step(), WizardStep::Submitting);
        assert!(wizard.submission().lease_expires_at.is_none());
        assert_eq!(
            wizard.submission().last_error.as_deref(),
            Some("sink unavailable")
        );

        let retry = begin(&mut wizard);
        assert_eq!(retry.draft, first.draft);
        assert_eq!(wizard.submission().attempts, 2);
    }

    #[test]
    fn submitting_draft_cannot_be_edited() {
        let mut wizard = wizard_at_review();
        begin(&mut wizard);
        assert_eq!(
            wizard.set_description("late edit").unwrap_err(),
            WizardError::DraftFrozen
        );
    }

    #[test]
    fn confirm_requires_an_attempt_in_flight() {
        let mut wizard = wizard_at_review();
        assert!(wizard.confirm_submission(1, ReportId::generate()).is_err());
    }

    #[test]
    fn abandoned_submission_cannot_be_confirmed() {
        let mut wizard = wizard_at_review();
        let attempt = begin(&mut wizard);

        wizard.abandon();

        assert!(!wizard.is_current_attempt(attempt.number));
        assert!(wizard
            .confirm_submission(attempt.number, ReportId::generate())
            .is_err());
        assert_eq!(wizard.step(), WizardStep::SelectingType);
    }

    #[test]
    fn version_only_moves_when_incremented() {
        let mut wizard = wizard_at_review();
        assert_eq!(wizard.version(), 0);

        wizard.increment_version();

        assert_eq!(wizard.version(), 1);
    }

    #[test]
    fn abandon_discards_draft_but_keeps_location() {
        let mut wizard = wizard_at_review();
        wizard.abandon();

        assert_eq!(wizard.step(), WizardStep::SelectingType);
        assert!(wizard.draft().is_none());
        assert!(wizard.details().is_none());
        assert_eq!(wizard.location_status(), LocationStatus::Resolved);
    }

    #[test]
    fn abandon_after_confirmation_starts_a_fresh_report() {
        let mut wizard = wizard_at_review();
        let attempt = begin(&mut wizard);
        wizard
            .confirm_submission(attempt.number, ReportId::generate())
            .unwrap();

        wizard.abandon();

        assert!(wizard.confirmation().is_none());
        assert!(wizard.can_select_hazard());
    }
}
