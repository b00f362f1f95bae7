//! Photo domain module.

mod capture;
mod evidence;

pub use capture::{CaptureOutcome, PhotoCapture, SelectedImage};
pub use evidence::PhotoEvidence;

use thiserror::Error;

/// Photo acquisition failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Selected file is not an image: {0}")]
    NotAnImage(String),

    #[error("Malformed photo data: {0}")]
    Malformed(String),
}

impl PhotoError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        PhotoError::Malformed(reason.into())
    }
}
