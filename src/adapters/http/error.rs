//! JSON error responses shared by every router.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::wizard::WizardError;

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Set when repeating the same request may succeed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub retryable: bool,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            retryable: false,
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Wizard(err) => wizard_status(err),
            ApiError::Domain(err) => status_for_code(err.code),
        }
    }

    pub fn code(&self) -> String {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST".to_string(),
            ApiError::NotFound(_) => "NOT_FOUND".to_string(),
            ApiError::InvalidBody(rejection) => match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE".to_string(),
                StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE".to_string(),
                _ => "INVALID_BODY".to_string(),
            },
            ApiError::Wizard(err) => err.code().to_string(),
            ApiError::Domain(err) => err.code.to_string(),
        }
    }
}

fn wizard_status(err: &WizardError) -> StatusCode {
    match err {
        WizardError::NotFound(_) => StatusCode::NOT_FOUND,
        WizardError::UnknownHazardType(_) | WizardError::UnknownField { .. } => {
            StatusCode::BAD_REQUEST
        }
        WizardError::InvalidFieldValue(_) | WizardError::Photo(_) | WizardError::MissingPhoto => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        WizardError::InvalidTransition { .. }
        | WizardError::WrongStep(_)
        | WizardError::LocationUnavailable(_)
        | WizardError::LocationPending
        | WizardError::DraftFrozen
        | WizardError::SubmissionInProgress
        | WizardError::Conflict => StatusCode::CONFLICT,
        WizardError::SubmissionFailed { .. } => StatusCode::BAD_GATEWAY,
        WizardError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn status_for_code(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::WizardNotFound
        | ErrorCode::ReportNotFound
        | ErrorCode::UnknownHazardType
        | ErrorCode::UnknownField => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition
        | ErrorCode::LocationUnavailable
        | ErrorCode::LocationPending
        | ErrorCode::DraftFrozen
        | ErrorCode::SubmissionInProgress
        | ErrorCode::ConcurrencyConflict => StatusCode::CONFLICT,
        ErrorCode::MissingPhoto => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::SubmissionFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let mut body = ErrorResponse::new(self.code(), self.to_string());
        body.retryable = matches!(&self, ApiError::Wizard(err) if err.is_retryable());
        (status, Json(body)).into_response()
    }
}
