//! LogExerciseHandler - Command handler for recording a session's result.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::foundation::WorkoutSessionId;
use crate::domain::workout::{WorkoutError, WorkoutSession};
use crate::ports::WorkoutSessionRepository;

/// Command to log completed reps.
#[derive(Debug, Clone)]
pub struct LogExerciseCommand {
    pub session_id: WorkoutSessionId,
    pub completed_reps: i32,
}

/// Handler for logging results. Re-logging overwrites the previous value.
pub struct LogExerciseHandler {
    repository: Arc<dyn WorkoutSessionRepository>,
}

impl LogExerciseHandler {
    pub fn new(repository: Arc<dyn WorkoutSessionRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(session_id = %cmd.session_id))]
    pub async fn handle(&self, cmd: LogExerciseCommand) -> Result<WorkoutSession, WorkoutError> {
        let mut session = self
            .repository
            .find_by_id(cmd.session_id)
            .await?
            .ok_or(WorkoutError::NotFound(cmd.session_id))?;

        session.log(cmd.completed_reps)?;
        self.repository.record_log(&session).await?;

        info!(
            completed_reps = cmd.completed_reps,
            assigned_reps = session.assigned_reps(),
            "Exercise logged"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::NewUser;
    use crate::domain::workout::NewWorkoutSession;
    use crate::ports::UserRepository;

    async fn setup(assigned: i32) -> (Arc<InMemoryWorkoutStore>, WorkoutSession) {
        let store = Arc::new(InMemoryWorkoutStore::new());
        let user = UserRepository::create(
            store.as_ref(),
            &NewUser::new("Ada", None, Timestamp::now()).unwrap(),
        )
        .await
        .unwrap();
        let session = WorkoutSessionRepository::create(
            store.as_ref(),
            &NewWorkoutSession::new(user.id(), None, assigned, Timestamp::now()).unwrap(),
        )
        .await
        .unwrap();
        (store, session)
    }

    #[tokio::test]
    async fn logs_completed_reps() {
        let (store, session) = setup(10).await;
        let handler = LogExerciseHandler::new(store.clone());

        let logged = handler
            .handle(LogExerciseCommand {
                session_id: session.id(),
                completed_reps: 8,
            })
            .await
            .unwrap();

        assert_eq!(logged.completed_reps(), Some(8));
        assert_eq!(logged.completion_percentage(), Some(80.0));
        let stored = WorkoutSessionRepository::find_by_id(store.as_ref(), session.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.completed_reps(), Some(8));
    }

    #[tokio::test]
    async fn relog_overwrites_previous_value() {
        let (store, session) = setup(10).await;
        let handler = LogExerciseHandler::new(store.clone());

        for reps in [3, 11] {
            handler
                .handle(LogExerciseCommand {
                    session_id: session.id(),
                    completed_reps: reps,
                })
                .await
                .unwrap();
        }

        let stored = WorkoutSessionRepository::find_by_id(store.as_ref(), session.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.completed_reps(), Some(11));
    }

    #[tokio::test]
    async fn negative_reps_rejected_without_change() {
        let (store, session) = setup(10).await;
        let handler = LogExerciseHandler::new(store.clone());

        let err = handler
            .handle(LogExerciseCommand {
                session_id: session.id(),
                completed_reps: -1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, WorkoutError::ValidationFailed { .. }));
        let stored = WorkoutSessionRepository::find_by_id(store.as_ref(), session.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.completed_reps(), None);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (store, _) = setup(10).await;
        let handler = LogExerciseHandler::new(store);

        let err = handler
            .handle(LogExerciseCommand {
                session_id: WorkoutSessionId::new(77),
                completed_reps: 1,
            })
            .await
            .unwrap_err();
        assert_eq!(err, WorkoutError::NotFound(WorkoutSessionId::new(77)));
    }

    #[tokio::test]
    async fn ended_session_rejects_log() {
        let (store, mut session) = setup(10).await;
        session.log(10).unwrap();
        store.record_log(&session).await.unwrap();
        store.end_session(session.id(), Timestamp::now()).await.unwrap();
        let handler = LogExerciseHandler::new(store);

        let err = handler
            .handle(LogExerciseCommand {
                session_id: session.id(),
                completed_reps: 4,
            })
            .await
            .unwrap_err();
        assert_eq!(err, WorkoutError::SessionNotActive(session.id()));
    }
}
