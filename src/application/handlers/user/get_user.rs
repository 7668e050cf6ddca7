//! GetUserHandler - Query handler for a user with workout statistics.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::foundation::UserId;
use crate::domain::recommendation::MIN_RECOMMENDED_REPS;
use crate::domain::user::{User, UserError};
use crate::ports::{RecommendationReader, UserRepository, WorkoutSessionReader};

/// Query to fetch a user.
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

/// Aggregate workout numbers for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total_workouts: u64,
    /// Sessions with a logged result.
    pub total_exercises: u64,
    pub active_sessions: u64,
    pub current_recommended_reps: i32,
}

/// A user together with their stats.
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user: User,
    pub stats: UserStats,
}

/// Handler for fetching users.
pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn WorkoutSessionReader>,
    recommendations: Arc<dyn RecommendationReader>,
}

impl GetUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn WorkoutSessionReader>,
        recommendations: Arc<dyn RecommendationReader>,
    ) -> Self {
        Self {
            users,
            sessions,
            recommendations,
        }
    }

    #[instrument(skip(self), fields(user_id = %query.user_id))]
    pub async fn handle(&self, query: GetUserQuery) -> Result<UserDetail, UserError> {
        let user = self
            .users
            .find_by_id(query.user_id)
            .await?
            .ok_or(UserError::NotFound(query.user_id))?;

        let counts = self.sessions.counts(query.user_id).await?;
        let current_recommended_reps = self
            .recommendations
            .find_by_user(query.user_id)
            .await?
            .map(|r| r.recommended_reps())
            .unwrap_or(MIN_RECOMMENDED_REPS);

        Ok(UserDetail {
            user,
            stats: UserStats {
                total_workouts: counts.total,
                total_exercises: counts.logged,
                active_sessions: counts.active,
                current_recommended_reps,
            },
        })
    }
}
