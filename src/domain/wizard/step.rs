//! WizardStep - the report flow state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a reporting session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    SelectingType,
    FillingDetails,
    Reviewing,
    Submitting,
    Confirmed,
}

impl WizardStep {
    /// Field answers may only change while the form is open.
    pub fn accepts_edits(&self) -> bool {
        matches!(self, WizardStep::FillingDetails)
    }

    /// A draft exists and is read-only.
    pub fn has_frozen_draft(&self) -> bool {
        matches!(self, WizardStep::Reviewing | WizardStep::Submitting)
    }

    /// 1-based position in the four visible steps.
    pub fn step_number(&self) -> u8 {
        match self {
            WizardStep::SelectingType => 1,
            WizardStep::FillingDetails => 2,
            WizardStep::Reviewing | WizardStep::Submitting => 3,
            WizardStep::Confirmed => 4,
        }
    }
}

impl StateMachine for WizardStep {
    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            SelectingType => vec![FillingDetails],
            FillingDetails => vec![Reviewing, SelectingType],
            Reviewing => vec![Submitting, FillingDetails, SelectingType],
            Submitting => vec![Confirmed, SelectingType],
            Confirmed => vec![SelectingType],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::SelectingType => "Select Type",
            WizardStep::FillingDetails => "Fill Details",
            WizardStep::Reviewing => "Review",
            WizardStep::Submitting => "Submitting",
            WizardStep::Confirmed => "Confirmed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WizardStep::*;

    const ALL: [WizardStep; 5] = [SelectingType, FillingDetails, Reviewing, Submitting, Confirmed];

    #[test]
    fn forward_path_is_valid() {
        assert!(SelectingType.can_transition_to(&FillingDetails));
        assert!(FillingDetails.can_transition_to(&Reviewing));
        assert!(Reviewing.can_transition_to(&Submitting));
        assert!(Submitting.can_transition_to(&Confirmed));
    }

    #[test]
    fn steps_cannot_be_skipped() {
        assert!(!SelectingType.can_transition_to(&Reviewing));
        assert!(!FillingDetails.can_transition_to(&Submitting));
        assert!(!Reviewing.can_transition_to(&Confirmed));
    }

    #[test]
    fn review_can_step_back_to_details() {
        assert!(Reviewing.can_transition_to(&FillingDetails));
    }

    #[test]
    fn submitting_cannot_return_to_editing() {
        assert!(!Submitting.can_transition_to(&FillingDetails));
        assert!(!Submitting.can_transition_to(&Reviewing));
    }

    #[test]
    fn every_step_after_selection_can_be_abandoned() {
        for step in ALL.into_iter().filter(|s| *s != SelectingType) {
            assert!(step.can_transition_to(&SelectingType), "{:?}", step);
        }
    }

    #[test]
    fn no_step_is_terminal() {
        for step in ALL {
            assert!(!step.is_terminal());
        }
    }

    #[test]
    fn only_filling_details_accepts_edits() {
        let editable: Vec<_> = ALL.into_iter().filter(|s| s.accepts_edits()).collect();
        assert_eq!(editable, vec![FillingDetails]);
    }

    #[test]
    fn submitting_shares_step_number_with_review() {
        assert_eq!(Submitting.step_number(), Reviewing.step_number());
    }
}
