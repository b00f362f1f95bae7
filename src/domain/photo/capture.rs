//! PhotoCapture - the camera / file-picker interaction.

use serde::{Deserialize, Serialize};

use super::{PhotoError, PhotoEvidence};

/// An image the reporter picked or shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Result of a capture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured,
    /// The picker was dismissed; nothing changed.
    Cancelled,
}

/// Holds zero or one photo for the active report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCapture {
    evidence: Option<PhotoEvidence>,
    /// File currently held by the picker input.
    selected_file: Option<String>,
}

impl PhotoCapture {
    /// Picker filter; the platform only offers images.
    pub const ACCEPT: &'static str = "image/*";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn evidence(&self) -> Option<&PhotoEvidence> {
        self.evidence.as_ref()
    }

    pub fn has_photo(&self) -> bool {
        self.evidence.is_some()
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    /// Converts the picked image into evidence, replacing any previous photo.
    ///
    /// `None` means the reporter cancelled the picker.
    pub fn capture(&mut self, selection: Option<SelectedImage>) -> Result<CaptureOutcome, PhotoError> {
        let Some(image) = selection else {
            return Ok(CaptureOutcome::Cancelled);
        };
        let evidence = PhotoEvidence::encode(&image.content_type, &image.bytes)?;
        self.evidence = Some(evidence);
        self.selected_file = Some(image.file_name);
        Ok(CaptureOutcome::Captured)
    }

    /// Stores evidence that arrived already encoded.
    pub fn attach(&mut self, evidence: PhotoEvidence) {
        self.evidence = Some(evidence);
        self.selected_file = None;
    }

    /// Clears the photo and the picker so the same file can be chosen again.
    pub fn retake(&mut self) {
        self.evidence = None;
        self.selected_file = None;
    }
}
