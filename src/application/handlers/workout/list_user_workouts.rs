//! ListUserWorkoutsHandler - Query handler for a user's session history.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::foundation::UserId;
use crate::domain::workout::{WorkoutError, WorkoutSession};
use crate::ports::{Page, UserRepository, WorkoutListOptions, WorkoutSessionReader};

/// Query to list a user's sessions.
#[derive(Debug, Clone)]
pub struct ListUserWorkoutsQuery {
    pub user_id: UserId,
    pub options: WorkoutListOptions,
}

impl ListUserWorkoutsQuery {
    /// First page of all sessions, newest first.
    pub fn all(user_id: UserId) -> Self {
        Self {
            user_id,
            options: WorkoutListOptions::default(),
        }
    }
}

/// Handler for listing sessions.
pub struct ListUserWorkoutsHandler {
    users: Arc<dyn UserRepository>,
    reader: Arc<dyn WorkoutSessionReader>,
}

impl ListUserWorkoutsHandler {
    pub fn new(users: Arc<dyn UserRepository>, reader: Arc<dyn WorkoutSessionReader>) -> Self {
        Self { users, reader }
    }

    #[instrument(skip(self), fields(user_id = %query.user_id))]
    pub async fn handle(
        &self,
        query: ListUserWorkoutsQuery,
    ) -> Result<Page<WorkoutSession>, WorkoutError> {
        if !self.users.exists(query.user_id).await? {
            return Err(WorkoutError::UserNotFound(query.user_id));
        }
        Ok(self
            .reader
            .list_by_user(query.user_id, &query.options)
            .await?)
    }
}
