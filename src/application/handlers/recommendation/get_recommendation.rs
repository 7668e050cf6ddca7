//! GetRecommendationHandler - Query handler for a user's next target.
//!
//! Returns the stored recommendation, or the initial one for users who
//! have never completed a session, along with progression context.

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::foundation::UserId;
use crate::domain::recommendation::{Recommendation, Trend};
use crate::domain::workout::{WorkoutError, WorkoutSession};
use crate::ports::RecommendationReader;

/// Query for a user's recommendation.
#[derive(Debug, Clone)]
pub struct GetRecommendationQuery {
    pub user_id: UserId,
}

/// How the user has progressed across ended sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub trend: Trend,
    /// Current recommendation minus the first ended session's target.
    pub total_increase: i32,
    pub sessions_count: u64,
}

/// Recommendation plus the context it was derived from.
#[derive(Debug, Clone)]
pub struct RecommendationView {
    pub recommendation: Recommendation,
    pub last_workout: Option<WorkoutSession>,
    pub progression: Progression,
}

/// Handler for recommendation queries.
pub struct GetRecommendationHandler {
    recommendations: Arc<dyn RecommendationReader>,
}

impl GetRecommendationHandler {
    pub fn new(recommendations: Arc<dyn RecommendationReader>) -> Self {
        Self { recommendations }
    }

    /// Everything in the view comes from one snapshot, so the
    /// recommendation always matches `last_workout` and `sessions_count`.
    #[instrument(skip(self), fields(user_id = %query.user_id))]
    pub async fn handle(
        &self,
        query: GetRecommendationQuery,
    ) -> Result<RecommendationView, WorkoutError> {
        let user_id = query.user_id;
        let snapshot = self
            .recommendations
            .snapshot(user_id)
            .await?
            .ok_or(WorkoutError::UserNotFound(user_id))?;

        let recommendation = snapshot
            .recommendation
            .unwrap_or_else(|| Recommendation::initial(user_id));
        let total_increase = snapshot
            .first_ended
            .map(|first| recommendation.recommended_reps() - first.assigned_reps())
            .unwrap_or(0);

        debug!(
            recommended_reps = recommendation.recommended_reps(),
            sessions = snapshot.ended_count,
            "Recommendation loaded"
        );
        Ok(RecommendationView {
            progression: Progression {
                trend: recommendation.trend(),
                total_increase,
                sessions_count: snapshot.ended_count,
            },
            recommendation,
            last_workout: snapshot.last_ended,
        })
    }
}
