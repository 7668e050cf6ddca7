//! EndWorkoutHandler - Command handler for ending a session.
//!
//! Ending closes the session and replaces the user's recommendation in a
//! single repository call; the store derives both from its own current copy
//! of the session.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domain::foundation::{ErrorCategory, Timestamp, WorkoutSessionId};
use crate::domain::recommendation::Recommendation;
use crate::domain::workout::{WorkoutError, WorkoutSession};
use crate::ports::WorkoutSessionRepository;

/// Command to end a session.
#[derive(Debug, Clone)]
pub struct EndWorkoutCommand {
    pub session_id: WorkoutSessionId,
}

/// Result of ending a session.
#[derive(Debug, Clone)]
pub struct EndWorkoutResult {
    pub session: WorkoutSession,
    pub recommendation: Recommendation,
}

/// Handler for ending sessions.
pub struct EndWorkoutHandler {
    repository: Arc<dyn WorkoutSessionRepository>,
}

impl EndWorkoutHandler {
    pub fn new(repository: Arc<dyn WorkoutSessionRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(session_id = %cmd.session_id))]
    pub async fn handle(&self, cmd: EndWorkoutCommand) -> Result<EndWorkoutResult, WorkoutError> {
        let (session, recommendation) = self
            .repository
            .end_session(cmd.session_id, Timestamp::now())
            .await
            .map_err(|err| {
                let err = WorkoutError::from(err);
                match err.category() {
                    ErrorCategory::Internal | ErrorCategory::Unavailable => {
                        warn!(error = %err, "Failed to persist session end")
                    }
                    _ => debug!(error = %err, "Session end rejected"),
                }
                err
            })?;

        info!(
            user_id = %session.user_id(),
            next_reps = recommendation.recommended_reps(),
            trend = %recommendation.trend(),
            "Workout session ended"
        );
        Ok(EndWorkoutResult {
            session,
            recommendation,
        })
    }
}
