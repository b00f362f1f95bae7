//! Type-specific report fields and their values.
//!
//! A ranged-scale field stores a position along its ordered options; a
//! discrete-choice field stores the label of exactly one option.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// How a field is presented and what its stored value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// A slider over the option list; stores the selected position.
    RangedScale { min: u8, max: u8 },
    /// Mutually exclusive buttons; stores the selected label.
    DiscreteChoice,
}

/// Declaration of one field in a hazard's form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub options: &'static [&'static str],
}

impl FieldDefinition {
    pub const fn ranged_scale(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::RangedScale {
                min: 0,
                max: (options.len() - 1) as u8,
            },
            options,
        }
    }

    pub const fn discrete_choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::DiscreteChoice,
            options,
        }
    }

    /// Checks that `value` is one of this field's declared options.
    pub fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match (self.kind, value) {
            (FieldKind::RangedScale { min, max }, FieldValue::Position(position)) => {
                if *position < min || *position > max || usize::from(*position) >= self.options.len()
                {
                    return Err(ValidationError::out_of_range(
                        self.name,
                        i64::from(min),
                        i64::from(max),
                        i64::from(*position),
                    ));
                }
                Ok(())
            }
            (FieldKind::DiscreteChoice, FieldValue::Choice(label)) => {
                if self.options.contains(&label.as_str()) {
                    Ok(())
                } else {
                    Err(ValidationError::not_an_option(self.name, label.clone()))
                }
            }
            (FieldKind::RangedScale { .. }, FieldValue::Choice(_)) => Err(
                ValidationError::invalid_format(self.name, "expected a scale position"),
            ),
            (FieldKind::DiscreteChoice, FieldValue::Position(_)) => Err(
                ValidationError::invalid_format(self.name, "expected an option label"),
            ),
        }
    }

    /// Human-readable option for a stored value.
    ///
    /// A scale position resolves to `options[position]`, never the raw index.
    pub fn display(&self, value: &FieldValue) -> Option<&'static str> {
        match value {
            FieldValue::Position(position) => self.options.get(usize::from(*position)).copied(),
            FieldValue::Choice(label) => self
                .options
                .iter()
                .find(|option| **option == label.as_str())
                .copied(),
        }
    }
}

/// A stored answer: JSON number for scales, JSON string for choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Position(u8),
    Choice(String),
}

impl FieldValue {
    pub fn choice(label: impl Into<String>) -> Self {
        FieldValue::Choice(label.into())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Position(position) => write!(f, "{}", position),
            FieldValue::Choice(label) => write!(f, "{}", label),
        }
    }
}
