//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating lifecycle transitions
//! (post moderation state, for instance).

use thiserror::Error;

/// A rejected state transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct TransitionError {
    pub from: String,
    pub to: String,
}

/// Trait for status enums that represent state machines.
///
/// Implementors define valid transitions and get validated
/// transition methods for free.
///
/// ```ignore
/// let next = PostModerationState::Visible.transition_to(PostModerationState::Reported)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionError {
                from: format!("{:?}", self),
                to: format!("{:?}", target),
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
