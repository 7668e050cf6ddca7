//! User-specific error types.

use crate::domain::foundation::{DomainError, ErrorCategory, ErrorCode, UserId};

/// User-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// User was not found.
    NotFound(UserId),
    /// Another user already registered this email.
    EmailAlreadyExists(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Store temporarily unreachable.
    Unavailable(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::EmailAlreadyExists(_) => ErrorCode::EmailAlreadyExists,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Unavailable(_) => ErrorCode::ServiceUnavailable,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(id) => format!("User with ID {} does not exist", id),
            UserError::EmailAlreadyExists(email) => {
                format!("A user with email {} already exists", email)
            }
            UserError::ValidationFailed { message, .. } => message.clone(),
            UserError::Unavailable(msg) => format!("Service unavailable: {}", msg),
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Field the error refers to, for client display.
    pub fn field(&self) -> Option<&str> {
        match self {
            UserError::NotFound(_) => Some("user_id"),
            UserError::EmailAlreadyExists(_) => Some("email"),
            UserError::ValidationFailed { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UserNotFound => match err.detail("user_id").and_then(|s| s.parse().ok()) {
                Some(id) => UserError::NotFound(id),
                None => UserError::Infrastructure(err.to_string()),
            },
            ErrorCode::EmailAlreadyExists => UserError::EmailAlreadyExists(
                err.detail("email").unwrap_or_default().to_string(),
            ),
            ErrorCode::ValidationFailed => UserError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::ServiceUnavailable => UserError::Unavailable(err.message),
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_is_conflict() {
        let domain = DomainError::new(ErrorCode::EmailAlreadyExists, "taken")
            .with_detail("email", "ada@example.com");
        let err: UserError = domain.into();
        assert_eq!(err, UserError::EmailAlreadyExists("ada@example.com".to_string()));
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn not_found_message_names_user() {
        assert_eq!(
            UserError::not_found(UserId::new(9)).message(),
            "User with ID 9 does not exist"
        );
    }

    #[test]
    fn unexpected_codes_become_infrastructure() {
        let err: UserError = DomainError::database("select users", "timeout").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
