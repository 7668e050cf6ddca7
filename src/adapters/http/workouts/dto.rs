//! HTTP DTOs for workout session endpoints.

use serde::{Deserialize, Serialize};

use crate::application::EndWorkoutResult;
use crate::domain::foundation::{UserId, WorkoutSessionId, WorkoutStatus};
use crate::domain::workout::WorkoutSession;
use crate::ports::{PageRequest, SortOrder, StatusFilter, WorkoutListOptions, WorkoutSortField};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start a session.
#[derive(Debug, Clone, Deserialize)]
pub struct StartWorkoutRequest {
    pub assigned_reps: i32,
    #[serde(default)]
    pub exercise_name: Option<String>,
}

/// Request to record the reps actually done.
#[derive(Debug, Clone, Deserialize)]
pub struct LogExerciseRequest {
    pub completed_reps: i32,
}

/// Query parameters for `GET /users/:user_id/workouts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWorkoutsParams {
    #[serde(alias = "status_filter")]
    pub status: Option<StatusFilter>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<WorkoutSortField>,
    pub order: Option<SortOrder>,
}

impl ListWorkoutsParams {
    pub fn into_options(self) -> WorkoutListOptions {
        WorkoutListOptions {
            status: self.status.unwrap_or_default(),
            page: PageRequest::new(self.page, self.limit),
            sort_by: self.sort_by.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Exercise block of a session.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseData {
    pub exercise_name: String,
    pub assigned_reps: i32,
    pub completed_reps: Option<i32>,
    pub completion_percentage: Option<f64>,
}

/// A workout session.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSessionResponse {
    pub id: WorkoutSessionId,
    pub user_id: UserId,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub status: WorkoutStatus,
    pub exercise: ExerciseData,
}

impl From<&WorkoutSession> for WorkoutSessionResponse {
    fn from(session: &WorkoutSession) -> Self {
        Self {
            id: session.id(),
            user_id: session.user_id(),
            started_at: session.started_at().to_rfc3339(),
            ended_at: session.ended_at().map(|t| t.to_rfc3339()),
            status: session.status(),
            exercise: ExerciseData {
                exercise_name: session.exercise_name().to_string(),
                assigned_reps: session.assigned_reps(),
                completed_reps: session.completed_reps(),
                completion_percentage: session.completion_percentage(),
            },
        }
    }
}

/// Exercise block returned after logging.
#[derive(Debug, Clone, Serialize)]
pub struct LoggedExercise {
    pub assigned_reps: i32,
    pub completed_reps: Option<i32>,
    pub completion_percentage: Option<f64>,
}

/// Response to `PATCH /workouts/:session_id/log`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseLogResponse {
    pub session_id: WorkoutSessionId,
    pub exercise: LoggedExercise,
}

impl From<&WorkoutSession> for ExerciseLogResponse {
    fn from(session: &WorkoutSession) -> Self {
        Self {
            session_id: session.id(),
            exercise: LoggedExercise {
                assigned_reps: session.assigned_reps(),
                completed_reps: session.completed_reps(),
                completion_percentage: session.completion_percentage(),
            },
        }
    }
}

/// Outcome of the finished session.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSummary {
    pub assigned_reps: i32,
    pub completed_reps: Option<i32>,
    pub performance: Option<&'static str>,
    pub next_recommended_reps: i32,
    pub trend: &'static str,
}

/// Response to `PATCH /workouts/:session_id/end`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutEndResponse {
    pub session_id: WorkoutSessionId,
    pub ended_at: Option<String>,
    pub duration_minutes: Option<f64>,
    pub summary: WorkoutSummary,
}

impl From<&EndWorkoutResult> for WorkoutEndResponse {
    fn from(result: &EndWorkoutResult) -> Self {
        let session = &result.session;
        Self {
            session_id: session.id(),
            ended_at: session.ended_at().map(|t| t.to_rfc3339()),
            duration_minutes: session.duration_minutes(),
            summary: WorkoutSummary {
                assigned_reps: session.assigned_reps(),
                completed_reps: session.completed_reps(),
                performance: session.performance().map(|p| p.as_str()),
                next_recommended_reps: result.recommendation.recommended_reps(),
                trend: result.recommendation.trend().as_str(),
            },
        }
    }
}

/// Relative links to the follow-up actions on a session.
pub fn log_link(id: WorkoutSessionId) -> String {
    format!("/api/v1/workouts/{}/log", id)
}

pub fn end_link(id: WorkoutSessionId) -> String {
    format!("/api/v1/workouts/{}/end", id)
}
