//! Workout session repository port (write side).
//!
//! The store is the serialization point for per-user invariants: at most
//! one active session per user, and an ended session is never visible
//! without the recommendation it produced.

use crate::domain::foundation::{DomainError, Timestamp, UserId, WorkoutSessionId};
use crate::domain::recommendation::Recommendation;
use crate::domain::workout::{NewWorkoutSession, WorkoutSession};
use async_trait::async_trait;

/// Repository port for WorkoutSession persistence.
#[async_trait]
pub trait WorkoutSessionRepository: Send + Sync {
    /// Insert a new active session.
    ///
    /// The existence checks and the insert run as one atomic unit, so two
    /// concurrent calls for the same user cannot both succeed.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the owning user does not exist (detail `user_id`)
    /// - `ActiveSessionExists` if the user already has an active session
    ///   (details `user_id`, `active_session_id`)
    /// - `DatabaseError` on persistence failure
    async fn create(&self, session: &NewWorkoutSession) -> Result<WorkoutSession, DomainError>;

    /// Find a session by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: WorkoutSessionId)
        -> Result<Option<WorkoutSession>, DomainError>;

    /// Find the user's active session, if any.
    async fn find_active_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<WorkoutSession>, DomainError>;

    /// Persist a logged result.
    ///
    /// Only applies while the stored session is still active.
    ///
    /// # Errors
    ///
    /// - `WorkoutSessionNotFound` if the session does not exist
    /// - `SessionNotActive` if the stored session has ended meanwhile
    /// - `DatabaseError` on persistence failure
    async fn record_log(&self, session: &WorkoutSession) -> Result<(), DomainError>;

    /// End a session and store the recommendation derived from it.
    ///
    /// The stored session is re-read, ended and written back together with
    /// the user's new recommendation as one atomic unit. A log that
    /// committed earlier is the value the recommendation is computed from;
    /// a log racing this call either lands first or fails `SessionNotActive`.
    ///
    /// # Errors
    ///
    /// - `WorkoutSessionNotFound` if the session does not exist
    /// - `SessionNotActive` if the session has already ended
    /// - `ExerciseNotLogged` if no result has been logged
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn end_session(
        &self,
        id: WorkoutSessionId,
        ended_at: Timestamp,
    ) -> Result<(WorkoutSession, Recommendation), DomainError>;
}
