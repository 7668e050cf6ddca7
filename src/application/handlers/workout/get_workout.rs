//! GetWorkoutHandler - Query handler for a single session.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::foundation::WorkoutSessionId;
use crate::domain::workout::{WorkoutError, WorkoutSession};
use crate::ports::WorkoutSessionRepository;

/// Query to fetch a session by ID.
#[derive(Debug, Clone)]
pub struct GetWorkoutQuery {
    pub session_id: WorkoutSessionId,
}

/// Handler for fetching sessions.
pub struct GetWorkoutHandler {
    repository: Arc<dyn WorkoutSessionRepository>,
}

impl GetWorkoutHandler {
    pub fn new(repository: Arc<dyn WorkoutSessionRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(session_id = %query.session_id))]
    pub async fn handle(&self, query: GetWorkoutQuery) -> Result<WorkoutSession, WorkoutError> {
        self.repository
            .find_by_id(query.session_id)
            .await?
            .ok_or(WorkoutError::NotFound(query.session_id))
    }
}
