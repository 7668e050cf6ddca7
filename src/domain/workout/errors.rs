//! Workout-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCategory, ErrorCode, UserId, WorkoutSessionId,
};

/// Workout-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutError {
    /// Owning user was not found.
    UserNotFound(UserId),
    /// Session was not found.
    NotFound(WorkoutSessionId),
    /// The user already has an active session.
    ActiveSessionExists {
        user_id: UserId,
        active_session_id: Option<WorkoutSessionId>,
    },
    /// Session has already ended.
    SessionNotActive(WorkoutSessionId),
    /// Ending requires a logged result.
    ExerciseNotLogged(WorkoutSessionId),
    /// Invalid state for operation.
    InvalidState(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Store temporarily unreachable.
    Unavailable(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl WorkoutError {
    pub fn user_not_found(id: UserId) -> Self {
        WorkoutError::UserNotFound(id)
    }
    pub fn not_found(id: WorkoutSessionId) -> Self {
        WorkoutError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkoutError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        WorkoutError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkoutError::UserNotFound(_) => ErrorCode::UserNotFound,
            WorkoutError::NotFound(_) => ErrorCode::WorkoutSessionNotFound,
            WorkoutError::ActiveSessionExists { .. } => ErrorCode::ActiveSessionExists,
            WorkoutError::SessionNotActive(_) => ErrorCode::SessionNotActive,
            WorkoutError::ExerciseNotLogged(_) => ErrorCode::ExerciseNotLogged,
            WorkoutError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            WorkoutError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WorkoutError::Unavailable(_) => ErrorCode::ServiceUnavailable,
            WorkoutError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    pub fn message(&self) -> String {
        match self {
            WorkoutError::UserNotFound(id) => format!("User with ID {} does not exist", id),
            WorkoutError::NotFound(id) => {
                format!("Workout session with ID {} does not exist", id)
            }
            WorkoutError::ActiveSessionExists {
                user_id,
                active_session_id: Some(active),
            } => format!(
                "User {} already has an active workout session (ID: {})",
                user_id, active
            ),
            WorkoutError::ActiveSessionExists { user_id, .. } => {
                format!("User {} already has an active workout session", user_id)
            }
            WorkoutError::SessionNotActive(id) => format!("Workout session {} is not active", id),
            WorkoutError::ExerciseNotLogged(id) => {
                format!("Cannot end session {}: exercise results not logged", id)
            }
            WorkoutError::InvalidState(msg) => format!("Invalid state: {}", msg),
            WorkoutError::ValidationFailed { message, .. } => message.clone(),
            WorkoutError::Unavailable(msg) => format!("Service unavailable: {}", msg),
            WorkoutError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Field the error refers to, for client display.
    pub fn field(&self) -> Option<&str> {
        match self {
            WorkoutError::UserNotFound(_) | WorkoutError::ActiveSessionExists { .. } => {
                Some("user_id")
            }
            WorkoutError::NotFound(_)
            | WorkoutError::SessionNotActive(_)
            | WorkoutError::ExerciseNotLogged(_) => Some("session_id"),
            WorkoutError::ValidationFailed { field, .. } => Some(field),
            _ => None,
        }
    }

    /// The conflicting active session, when known.
    pub fn active_session_id(&self) -> Option<WorkoutSessionId> {
        match self {
            WorkoutError::ActiveSessionExists {
                active_session_id, ..
            } => *active_session_id,
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WorkoutError {}

impl From<DomainError> for WorkoutError {
    fn from(err: DomainError) -> Self {
        let session_id = err
            .detail("session_id")
            .and_then(|s| s.parse::<WorkoutSessionId>().ok());
        let user_id = err.detail("user_id").and_then(|s| s.parse::<UserId>().ok());

        match (err.code, session_id, user_id) {
            (ErrorCode::WorkoutSessionNotFound, Some(id), _) => WorkoutError::NotFound(id),
            (ErrorCode::UserNotFound, _, Some(id)) => WorkoutError::UserNotFound(id),
            (ErrorCode::SessionNotActive, Some(id), _) => WorkoutError::SessionNotActive(id),
            (ErrorCode::ExerciseNotLogged, Some(id), _) => WorkoutError::ExerciseNotLogged(id),
            (ErrorCode::ActiveSessionExists, _, Some(user_id)) => {
                WorkoutError::ActiveSessionExists {
                    user_id,
                    active_session_id: err
                        .detail("active_session_id")
                        .and_then(|s| s.parse().ok()),
                }
            }
            (ErrorCode::ValidationFailed, _, _) => WorkoutError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            (ErrorCode::ServiceUnavailable, _, _) => WorkoutError::Unavailable(err.message),
            (code, _, _) if code.category() == ErrorCategory::Conflict => {
                WorkoutError::InvalidState(err.message)
            }
            _ => WorkoutError::Infrastructure(err.to_string()),
        }
    }
}
