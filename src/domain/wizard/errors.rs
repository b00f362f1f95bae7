//! Wizard-specific error types.

use thiserror::Error;

use super::WizardStep;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WizardId};
use crate::domain::hazard::{CatalogError, HazardType};
use crate::domain::location::LocationFailure;
use crate::domain::photo::PhotoError;

/// Errors raised by wizard transitions and the handlers that drive them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Wizard not found: {0}")]
    NotFound(WizardId),

    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: WizardStep, to: WizardStep },

    #[error("Operation not available during {0}")]
    WrongStep(WizardStep),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(LocationFailure),

    #[error("Location is still being acquired")]
    LocationPending,

    #[error("Unknown hazard type: {0}")]
    UnknownHazardType(String),

    #[error("Hazard type {hazard_type} has no field '{field}'")]
    UnknownField {
        hazard_type: HazardType,
        field: String,
    },

    #[error(transparent)]
    InvalidFieldValue(#[from] ValidationError),

    #[error(transparent)]
    Photo(#[from] PhotoError),

    #[error("A photo is required before reviewing the report")]
    MissingPhoto,

    #[error("The report is under review and can no longer be edited")]
    DraftFrozen,

    #[error("The report is already being submitted")]
    SubmissionInProgress,

    #[error("The session was changed by another request")]
    Conflict,

    #[error("Submission failed after {attempts} attempt(s): {message}")]
    SubmissionFailed { attempts: u32, message: String },

    #[error("Storage error: {0}")]
    Infrastructure(String),
}

impl WizardError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        WizardError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::NotFound(_) => ErrorCode::WizardNotFound,
            WizardError::InvalidTransition { .. } | WizardError::WrongStep(_) => {
                ErrorCode::InvalidStateTransition
            }
            WizardError::LocationUnavailable(_) => ErrorCode::LocationUnavailable,
            WizardError::LocationPending => ErrorCode::LocationPending,
            WizardError::UnknownHazardType(_) => ErrorCode::UnknownHazardType,
            WizardError::UnknownField { .. } => ErrorCode::UnknownField,
            WizardError::InvalidFieldValue(_) | WizardError::Photo(_) => {
                ErrorCode::ValidationFailed
            }
            WizardError::MissingPhoto => ErrorCode::MissingPhoto,
            WizardError::DraftFrozen => ErrorCode::DraftFrozen,
            WizardError::SubmissionInProgress => ErrorCode::SubmissionInProgress,
            WizardError::Conflict => ErrorCode::ConcurrencyConflict,
            WizardError::SubmissionFailed { .. } => ErrorCode::SubmissionFailed,
            WizardError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// The reporter can retry the same action without changing anything.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WizardError::SubmissionFailed { .. })
    }
}

impl From<CatalogError> for WizardError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownHazardType(slug) => WizardError::UnknownHazardType(slug),
            CatalogError::NotFound(hazard_type) => {
                WizardError::UnknownHazardType(hazard_type.slug().to_string())
            }
        }
    }
}

impl From<DomainError> for WizardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConcurrencyConflict => WizardError::Conflict,
            _ => WizardError::Infrastructure(err.to_string()),
        }
    }
}
