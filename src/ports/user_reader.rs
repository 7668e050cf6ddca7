//! User reader port (read side).

use super::listing::{Page, UserListOptions};
use crate::domain::foundation::DomainError;
use crate::domain::user::User;
use async_trait::async_trait;

/// A user together with the number of sessions they have started.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub user: User,
    pub total_workouts: u64,
}

/// Reader port for user listings.
#[async_trait]
pub trait UserReader: Send + Sync {
    /// List users with sorting and pagination.
    async fn list(&self, options: &UserListOptions) -> Result<Page<UserSummary>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn UserReader) {}
    }
}
