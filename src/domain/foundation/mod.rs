//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the workout domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;
mod workout_status;

pub use errors::{DomainError, ErrorCategory, ErrorCode, ValidationError};
pub use ids::{UserId, WorkoutSessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use workout_status::WorkoutStatus;
