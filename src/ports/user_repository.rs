//! User repository port (write side).

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};
use async_trait::async_trait;

/// Repository port for User persistence.
///
/// Implementations must enforce email uniqueness atomically with the insert.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// - `EmailAlreadyExists` if another user has the same email
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Find a user by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Check if a user exists.
    async fn exists(&self, id: UserId) -> Result<bool, DomainError>;
}
