//! Recommendation reader port.
//!
//! Records are only written through `WorkoutSessionRepository::end_session`.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::recommendation::Recommendation;
use crate::domain::workout::WorkoutSession;
use async_trait::async_trait;

/// A user's recommendation together with the ended sessions behind it.
///
/// All fields come from one consistent read: an ended session is never
/// reported alongside the recommendation that preceded it.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSnapshot {
    /// `None` before the first completed session.
    pub recommendation: Option<Recommendation>,
    /// Most recently ended session.
    pub last_ended: Option<WorkoutSession>,
    /// Earliest-started ended session.
    pub first_ended: Option<WorkoutSession>,
    pub ended_count: u64,
}

#[async_trait]
pub trait RecommendationReader: Send + Sync {
    /// Stored recommendation for a user, `None` before the first completed session.
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Recommendation>, DomainError>;

    /// Recommendation and progression context from a single snapshot.
    ///
    /// Returns `None` when the user does not exist.
    async fn snapshot(&self, user_id: UserId)
        -> Result<Option<RecommendationSnapshot>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn RecommendationReader) {}
    }
}
