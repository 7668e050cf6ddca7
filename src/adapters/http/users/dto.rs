//! HTTP DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{UserDetail, UserStats};
use crate::domain::foundation::UserId;
use crate::domain::user::User;
use crate::ports::{PageRequest, SortOrder, UserListOptions, UserSortField, UserSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to register a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Query parameters for `GET /users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<UserSortField>,
    pub order: Option<SortOrder>,
}

impl ListUsersParams {
    pub fn into_options(self) -> UserListOptions {
        UserListOptions {
            page: PageRequest::new(self.page, self.limit),
            sort_by: self.sort_by.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// User as returned by create and list.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub created_at: String,
    pub total_workouts: u64,
}

impl UserResponse {
    pub fn new(user: &User, total_workouts: u64) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().map(str::to_string),
            created_at: user.created_at().to_rfc3339(),
            total_workouts,
        }
    }
}

impl From<UserSummary> for UserResponse {
    fn from(summary: UserSummary) -> Self {
        Self::new(&summary.user, summary.total_workouts)
    }
}

/// Workout statistics block.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserStatsResponse {
    pub total_workouts: u64,
    pub total_exercises: u64,
    pub active_sessions: u64,
    pub current_recommended_reps: i32,
}

impl From<UserStats> for UserStatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            total_workouts: stats.total_workouts,
            total_exercises: stats.total_exercises,
            active_sessions: stats.active_sessions,
            current_recommended_reps: stats.current_recommended_reps,
        }
    }
}

/// User with statistics, returned by `GET /users/:user_id`.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailResponse {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub created_at: String,
    pub stats: UserStatsResponse,
}

impl From<UserDetail> for UserDetailResponse {
    fn from(detail: UserDetail) -> Self {
        Self {
            id: detail.user.id(),
            name: detail.user.name().to_string(),
            email: detail.user.email().map(str::to_string),
            created_at: detail.user.created_at().to_rfc3339(),
            stats: detail.stats.into(),
        }
    }
}
