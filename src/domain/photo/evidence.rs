//! PhotoEvidence - an embeddable encoded image.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::PhotoError;

/// Image encoded as a `data:` URL so it can travel inside the report payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhotoEvidence(String);

impl PhotoEvidence {
    /// Encodes raw image bytes.
    pub fn encode(content_type: &str, bytes: &[u8]) -> Result<Self, PhotoError> {
        ensure_image(content_type)?;
        Ok(Self(format!(
            "data:{};base64,{}",
            content_type,
            STANDARD.encode(bytes)
        )))
    }

    /// Accepts an already-encoded `data:image/...;base64,...` URL.
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self, PhotoError> {
        let data_url = data_url.into();
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| PhotoError::malformed("missing data: scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| PhotoError::malformed("missing payload separator"))?;
        let content_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| PhotoError::malformed("payload must be base64 encoded"))?;
        ensure_image(content_type)?;
        if payload.is_empty() {
            return Err(PhotoError::malformed("empty payload"));
        }
        STANDARD
            .decode(payload)
            .map_err(|e| PhotoError::malformed(e.to_string()))?;
        Ok(Self(data_url))
    }

    pub fn as_data_url(&self) -> &str {
        &self.0
    }

    /// MIME type declared in the URL header.
    pub fn content_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }
}

// Payloads can be megabytes; keep them out of logs.
impl std::fmt::Debug for PhotoEvidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoEvidence")
            .field("content_type", &self.content_type())
            .field("len", &self.0.len())
            .finish()
    }
}

impl TryFrom<String> for PhotoEvidence {
    type Error = PhotoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_data_url(value)
    }
}

impl From<PhotoEvidence> for String {
    fn from(photo: PhotoEvidence) -> Self {
        photo.0
    }
}

fn ensure_image(content_type: &str) -> Result<(), PhotoError> {
    if content_type.starts_with("image/") && content_type.len() > "image/".len() {
        Ok(())
    } else {
        Err(PhotoError::NotAnImage(content_type.to_string()))
    }
}
