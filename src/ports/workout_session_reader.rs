//! Workout session reader port (read side).
//!
//! Queries used by history listings and user stats.

use super::listing::{Page, WorkoutListOptions};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::workout::WorkoutSession;
use async_trait::async_trait;

/// Per-user session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkoutCounts {
    /// All sessions ever started.
    pub total: u64,
    /// Sessions with a logged result.
    pub logged: u64,
    pub active: u64,
    pub ended: u64,
}

/// Reader port for workout session queries.
#[async_trait]
pub trait WorkoutSessionReader: Send + Sync {
    /// List a user's sessions with filtering, sorting and pagination.
    ///
    /// Sessions without an `ended_at` sort last when ordering by it.
    async fn list_by_user(
        &self,
        user_id: UserId,
        options: &WorkoutListOptions,
    ) -> Result<Page<WorkoutSession>, DomainError>;

    /// Session counters for a user.
    async fn counts(&self, user_id: UserId) -> Result<WorkoutCounts, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_session_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn WorkoutSessionReader) {}
    }
}
