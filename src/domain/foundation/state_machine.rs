//! State machine trait for status enums.
//!
//! Gives lifecycle statuses one way to validate and perform transitions.

use super::{DomainError, ErrorCode};

/// A status enum with a fixed set of allowed moves.
///
/// Implementors list the moves; `transition_to` and `is_terminal` follow.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WorkoutStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Active, Ended))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Active => vec![Ended],
///             Ended => vec![],
///         }
///     }
/// }
///
/// let next = WorkoutStatus::Active.transition_to(WorkoutStatus::Ended)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    fn valid_transitions(&self) -> Vec<Self>;

    /// `target` if the move is allowed, else `InvalidStateTransition`.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// No outgoing moves.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
