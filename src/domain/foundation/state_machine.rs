//! State machine trait for step and status enums.
//!
//! Gives every lifecycle enum (wizard steps, probe status) the same
//! checked-transition surface.

use super::ValidationError;

/// Trait for enums that represent a finite state machine.
///
/// Implementors list their edges once; checked transitions come for free.
///
/// ```ignore
/// impl StateMachine for WizardStep {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             SelectingType => vec![FillingDetails],
///             FillingDetails => vec![Reviewing, SelectingType],
///             // ...
///         }
///     }
/// }
///
/// let next = WizardStep::Reviewing.transition_to(WizardStep::Submitting)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Every state reachable from `self` in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if `target` is one of the outgoing edges.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs a checked transition.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// A state with no outgoing edges.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
