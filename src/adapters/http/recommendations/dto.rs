//! HTTP DTOs for recommendation endpoints.

use serde::Serialize;

use crate::application::RecommendationView;
use crate::domain::foundation::{UserId, WorkoutSessionId};
use crate::domain::recommendation::Trend;
use crate::domain::workout::WorkoutSession;

/// The most recently ended session.
#[derive(Debug, Clone, Serialize)]
pub struct LastWorkoutInfo {
    pub session_id: WorkoutSessionId,
    pub assigned_reps: i32,
    pub completed_reps: Option<i32>,
    pub date: Option<String>,
}

impl From<&WorkoutSession> for LastWorkoutInfo {
    fn from(session: &WorkoutSession) -> Self {
        Self {
            session_id: session.id(),
            assigned_reps: session.assigned_reps(),
            completed_reps: session.completed_reps(),
            date: session.ended_at().map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressionInfo {
    pub trend: Trend,
    pub total_increase: i32,
    pub sessions_count: u64,
}

/// Response to `GET /users/:user_id/recommendations`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub user_id: UserId,
    pub recommended_reps: i32,
    pub recommendation_reason: String,
    pub last_workout: Option<LastWorkoutInfo>,
    pub progression: ProgressionInfo,
}

impl From<RecommendationView> for RecommendationResponse {
    fn from(view: RecommendationView) -> Self {
        Self {
            user_id: view.recommendation.user_id(),
            recommended_reps: view.recommendation.recommended_reps(),
            recommendation_reason: view.recommendation.reason().to_string(),
            last_workout: view.last_workout.as_ref().map(LastWorkoutInfo::from),
            progression: ProgressionInfo {
                trend: view.progression.trend,
                total_increase: view.progression.total_increase,
                sessions_count: view.progression.sessions_count,
            },
        }
    }
}
