//! WorkoutSession aggregate entity.
//!
//! A session tracks one exercise: a target (assigned reps), an optional
//! logged result (completed reps), and the active → ended lifecycle.
//!
//! # Ownership
//!
//! Sessions reference their user by ID. The one-active-session-per-user
//! rule spans sessions, so it is enforced by the repository, not here.

use crate::domain::foundation::{
    DomainError, ErrorCode, StateMachine, Timestamp, UserId, ValidationError, WorkoutSessionId,
    WorkoutStatus,
};
use crate::domain::recommendation::{Performance, Recommendation};
use serde::{Deserialize, Serialize};

/// Exercise used when the caller does not name one.
pub const DEFAULT_EXERCISE_NAME: &str = "Push-ups";

/// Maximum length for an exercise name.
pub const MAX_EXERCISE_NAME_LENGTH: usize = 100;

/// Validated request to start a session, before the store assigns an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutSession {
    user_id: UserId,
    exercise_name: String,
    assigned_reps: i32,
    started_at: Timestamp,
}

impl NewWorkoutSession {
    /// Validates start parameters.
    ///
    /// A missing or blank exercise name falls back to [`DEFAULT_EXERCISE_NAME`].
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `assigned_reps < 1` or the name is too long
    pub fn new(
        user_id: UserId,
        exercise_name: Option<String>,
        assigned_reps: i32,
        started_at: Timestamp,
    ) -> Result<Self, DomainError> {
        if assigned_reps < 1 {
            return Err(ValidationError::too_small("assigned_reps", 1, assigned_reps as i64).into());
        }

        let exercise_name = match exercise_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_EXERCISE_NAME.to_string(),
        };
        let len = exercise_name.chars().count();
        if len > MAX_EXERCISE_NAME_LENGTH {
            return Err(
                ValidationError::bad_length("exercise_name", 1, MAX_EXERCISE_NAME_LENGTH, len)
                    .into(),
            );
        }

        Ok(Self {
            user_id,
            exercise_name,
            assigned_reps,
            started_at,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }

    pub fn assigned_reps(&self) -> i32 {
        self.assigned_reps
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Materializes the session once the store has assigned its ID.
    pub fn into_session(self, id: WorkoutSessionId) -> WorkoutSession {
        WorkoutSession {
            id,
            user_id: self.user_id,
            exercise_name: self.exercise_name,
            assigned_reps: self.assigned_reps,
            completed_reps: None,
            status: WorkoutStatus::Active,
            started_at: self.started_at,
            ended_at: None,
        }
    }
}

/// WorkoutSession aggregate.
///
/// # Invariants
///
/// - `assigned_reps >= 1`
/// - `completed_reps`, when present, is `>= 0`
/// - `ended_at` is set iff `status == Ended`
/// - an ended session always has `completed_reps`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    id: WorkoutSessionId,
    user_id: UserId,
    exercise_name: String,
    assigned_reps: i32,
    completed_reps: Option<i32>,
    status: WorkoutStatus,
    started_at: Timestamp,
    ended_at: Option<Timestamp>,
}

impl WorkoutSession {
    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: WorkoutSessionId,
        user_id: UserId,
        exercise_name: String,
        assigned_reps: i32,
        completed_reps: Option<i32>,
        status: WorkoutStatus,
        started_at: Timestamp,
        ended_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            exercise_name,
            assigned_reps,
            completed_reps,
            status,
            started_at,
            ended_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> WorkoutSessionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }

    pub fn assigned_reps(&self) -> i32 {
        self.assigned_reps
    }

    pub fn completed_reps(&self) -> Option<i32> {
        self.completed_reps
    }

    pub fn status(&self) -> WorkoutStatus {
        self.status
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn ended_at(&self) -> Option<&Timestamp> {
        self.ended_at.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// True once a result has been logged.
    pub fn is_logged(&self) -> bool {
        self.completed_reps.is_some()
    }

    /// Completed over assigned reps as a percentage, two decimals.
    pub fn completion_percentage(&self) -> Option<f64> {
        self.completed_reps.map(|completed| {
            let pct = completed as f64 / self.assigned_reps as f64 * 100.0;
            (pct * 100.0).round() / 100.0
        })
    }

    /// How the logged result compares to the target.
    pub fn performance(&self) -> Option<Performance> {
        self.completed_reps
            .map(|completed| Performance::assess(self.assigned_reps, completed))
    }

    /// Minutes between start and end, two decimals. `None` while active.
    pub fn duration_minutes(&self) -> Option<f64> {
        self.ended_at
            .as_ref()
            .map(|ended| ended.minutes_since(&self.started_at))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records the result. Re-logging overwrites the previous value.
    ///
    /// # Errors
    ///
    /// - `SessionNotActive` if the session has ended
    /// - `ValidationFailed` if `completed_reps < 0`
    pub fn log(&mut self, completed_reps: i32) -> Result<(), DomainError> {
        self.ensure_active()?;
        if completed_reps < 0 {
            return Err(
                ValidationError::too_small("completed_reps", 0, completed_reps as i64).into(),
            );
        }
        self.completed_reps = Some(completed_reps);
        Ok(())
    }

    /// Ends the session and computes the user's next recommendation.
    ///
    /// Stores call this on their locked copy and persist the session and the
    /// returned recommendation in a single write.
    ///
    /// # Errors
    ///
    /// - `SessionNotActive` if the session has already ended
    /// - `ExerciseNotLogged` if no result was logged
    pub fn end(&mut self, now: Timestamp) -> Result<Recommendation, DomainError> {
        self.ensure_active()?;
        let completed = self.completed_reps.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ExerciseNotLogged,
                format!(
                    "Cannot end session {}: exercise results not logged",
                    self.id
                ),
            )
            .with_detail("session_id", self.id.to_string())
        })?;

        self.status = self.status.transition_to(WorkoutStatus::Ended)?;
        self.ended_at = Some(now);

        Ok(Recommendation::after_session(
            self.user_id,
            self.assigned_reps,
            completed,
            now,
        ))
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(not_active(self.id))
        }
    }
}

/// Error raised when a mutation targets a session that is no longer active.
pub fn not_active(id: WorkoutSessionId) -> DomainError {
    DomainError::new(
        ErrorCode::SessionNotActive,
        format!("Workout session {} is not active", id),
    )
    .with_detail("session_id", id.to_string())
}

/// Error raised when a session id matches nothing in the store.
pub fn session_not_found(id: WorkoutSessionId) -> DomainError {
    DomainError::new(
        ErrorCode::WorkoutSessionNotFound,
        format!("Workout session with ID {} does not exist", id),
    )
    .with_detail("session_id", id.to_string())
}

/// Error raised when a session is started for a user the store does not know.
pub fn owner_not_found(id: UserId) -> DomainError {
    DomainError::new(
        ErrorCode::UserNotFound,
        format!("User with ID {} does not exist", id),
    )
    .with_detail("user_id", id.to_string())
}

/// Error raised when a user already has a running session.
pub fn active_session_exists(user_id: UserId, active: Option<WorkoutSessionId>) -> DomainError {
    let message = match active {
        Some(id) => format!(
            "User {} already has an active workout session (ID: {})",
            user_id, id
        ),
        None => format!("User {} already has an active workout session", user_id),
    };
    let err = DomainError::new(ErrorCode::ActiveSessionExists, message)
        .with_detail("user_id", user_id.to_string());
    match active {
        Some(id) => err.with_detail("active_session_id", id.to_string()),
        None => err,
    }
}
