//! Workout domain module.
//!
//! Handles the workout session lifecycle: start, log a result, end.
//! Ending a session yields the user's next recommendation, which must be
//! persisted together with the ended session.

mod aggregate;
mod errors;

pub use aggregate::{
    active_session_exists, not_active, owner_not_found, session_not_found,
    NewWorkoutSession, WorkoutSession, DEFAULT_EXERCISE_NAME, MAX_EXERCISE_NAME_LENGTH,
};
pub use errors::WorkoutError;
