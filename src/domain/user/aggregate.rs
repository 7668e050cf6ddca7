//! User aggregate and its validated creation request.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId, ValidationError};
use serde::{Deserialize, Serialize};

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validated request to create a user, before the store assigns an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: Option<String>,
    created_at: Timestamp,
}

impl NewUser {
    /// Validates and normalizes user input.
    ///
    /// The name is trimmed. The email is trimmed and lowercased; a blank
    /// email is treated as absent.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for a name outside 2-100 characters
    /// - `ValidationFailed` for an email that is not `local@domain`
    pub fn new(
        name: &str,
        email: Option<&str>,
        created_at: Timestamp,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        let len = name.chars().count();
        if len == 0 {
            return Err(ValidationError::empty_field("name").into());
        }
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
            return Err(
                ValidationError::bad_length("name", MIN_NAME_LENGTH, MAX_NAME_LENGTH, len).into(),
            );
        }

        let email = match email.map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(normalize_email(raw)?),
            _ => None,
        };

        Ok(Self {
            name: name.to_string(),
            email,
            created_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Materializes the user once the store has assigned its ID.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// Error raised when another user already registered `email`.
pub fn email_taken(email: &str) -> DomainError {
    DomainError::new(
        ErrorCode::EmailAlreadyExists,
        format!("A user with email {} already exists", email),
    )
    .with_detail("email", email)
}

fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    if raw.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::bad_length(
            "email",
            3,
            MAX_EMAIL_LENGTH,
            raw.len(),
        ));
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_format("email", "contains whitespace"));
    }

    let (local, domain) = raw
        .split_once('@')
        .ok_or_else(|| ValidationError::invalid_format("email", "missing @ symbol"))?;

    if local.is_empty() {
        return Err(ValidationError::invalid_format("email", "missing local part"));
    }
    if domain.contains('@') {
        return Err(ValidationError::invalid_format("email", "multiple @ symbols"));
    }
    let labels_ok = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    if !labels_ok {
        return Err(ValidationError::invalid_format("email", "invalid domain"));
    }

    Ok(raw.to_lowercase())
}

/// A person who performs workouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: Option<String>,
    created_at: Timestamp,
}

impl User {
    /// Reconstitute a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn field_of(err: DomainError) -> String {
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        err.detail("field").unwrap_or_default().to_string()
    }

    #[test]
    fn trims_name_and_lowercases_email() {
        let new = NewUser::new("  Ada Lovelace ", Some(" Ada@Example.COM "), Timestamp::now())
            .unwrap();
        assert_eq!(new.name(), "Ada Lovelace");
        assert_eq!(new.email(), Some("ada@example.com"));
    }

    #[test]
    fn blank_email_is_absent() {
        let new = NewUser::new("Ada", Some("  "), Timestamp::now()).unwrap();
        assert_eq!(new.email(), None);
    }

    #[test]
    fn rejects_short_and_long_names() {
        assert_eq!(field_of(NewUser::new("A", None, Timestamp::now()).unwrap_err()), "name");
        assert_eq!(
            field_of(NewUser::new(&"x".repeat(101), None, Timestamp::now()).unwrap_err()),
            "name"
        );
        assert_eq!(field_of(NewUser::new("   ", None, Timestamp::now()).unwrap_err()), "name");
    }

    #[test]
    fn accepts_boundary_name_lengths() {
        assert!(NewUser::new("Al", None, Timestamp::now()).is_ok());
        assert!(NewUser::new(&"x".repeat(100), None, Timestamp::now()).is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in [
            "no-at-sign",
            "@example.com",
            "a@localhost",
            "a@b@c.com",
            "a b@c.com",
            "a@.com",
        ] {
            let err = NewUser::new("Ada", Some(bad), Timestamp::now()).unwrap_err();
            assert_eq!(field_of(err), "email", "expected rejection for {}", bad);
        }
    }

    #[test]
    fn into_user_keeps_fields() {
        let now = Timestamp::now();
        let user = NewUser::new("Grace", Some("grace@navy.mil"), now)
            .unwrap()
            .into_user(UserId::new(3));
        assert_eq!(user.id(), UserId::new(3));
        assert_eq!(user.name(), "Grace");
        assert_eq!(user.created_at(), &now);
    }
}
