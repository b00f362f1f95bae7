//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a report wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardId(Uuid);

impl WizardId {
    /// Creates a new random WizardId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a WizardId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WizardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WizardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WizardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Durable identifier handed out for a submitted report, e.g. `CS-4F7K2QX9A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReportId(String);

impl ReportId {
    pub const PREFIX: &'static str = "CS-";
    const SUFFIX_LEN: usize = 9;
    const ALPHABET: &'static [u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Generates a new random report identifier.
    pub fn generate() -> Self {
        let mut entropy = Uuid::new_v4().as_u128();
        let mut suffix = String::with_capacity(Self::SUFFIX_LEN);
        for _ in 0..Self::SUFFIX_LEN {
            suffix.push(Self::ALPHABET[(entropy % 36) as usize] as char);
            entropy /= 36;
        }
        Self(format!("{}{}", Self::PREFIX, suffix))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suffix = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| ValidationError::invalid_format("report_id", "missing CS- prefix"))?;

        if suffix.len() != Self::SUFFIX_LEN
            || !suffix
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        {
            return Err(ValidationError::invalid_format(
                "report_id",
                "expected 9 uppercase alphanumeric characters",
            ));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ReportId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReportId> for String {
    fn from(id: ReportId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_id_generates_unique_values() {
        let id1 = WizardId::new();
        let id2 = WizardId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn wizard_id_parses_from_string() {
        let original = WizardId::new();
        let parsed: WizardId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn wizard_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<WizardId>().is_err());
    }

    #[test]
    fn report_id_has_cs_prefix_and_nine_characters() {
        let id = ReportId::generate();
        assert!(id.as_str().starts_with("CS-"));
        assert_eq!(id.as_str().len(), 12);
        assert!(id.as_str()[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn report_id_parse_accepts_generated_ids() {
        let id = ReportId::generate();
        let parsed: ReportId = id.as_str().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn report_id_parse_rejects_wrong_prefix() {
        assert!("XX-ABCDEFGHI".parse::<ReportId>().is_err());
    }

    #[test]
    fn report_id_parse_rejects_lowercase_suffix() {
        assert!("CS-abcdefghi".parse::<ReportId>().is_err());
    }

    #[test]
    fn report_id_serializes_as_plain_string() {
        let id: ReportId = "CS-ABC123XYZ".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"CS-ABC123XYZ\"");
    }
}
