//! StartWorkoutHandler - Command handler for starting a workout session.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::workout::{NewWorkoutSession, WorkoutError, WorkoutSession};
use crate::ports::WorkoutSessionRepository;

/// Command to start a new session.
#[derive(Debug, Clone)]
pub struct StartWorkoutCommand {
    pub user_id: UserId,
    pub exercise_name: Option<String>,
    pub assigned_reps: i32,
}

/// Handler for starting sessions.
///
/// The repository performs the user-exists and no-active-session checks
/// atomically with the insert.
pub struct StartWorkoutHandler {
    repository: Arc<dyn WorkoutSessionRepository>,
}

impl StartWorkoutHandler {
    pub fn new(repository: Arc<dyn WorkoutSessionRepository>) -> Self {
        Self { repository }
    }

    #[instrument(
        skip(self, cmd),
        fields(user_id = %cmd.user_id, assigned_reps = cmd.assigned_reps)
    )]
    pub async fn handle(&self, cmd: StartWorkoutCommand) -> Result<WorkoutSession, WorkoutError> {
        let request = NewWorkoutSession::new(
            cmd.user_id,
            cmd.exercise_name,
            cmd.assigned_reps,
            Timestamp::now(),
        )?;

        let session = self.repository.create(&request).await.map_err(|err| {
            let err = WorkoutError::from(err);
            debug!(error = %err, "Workout start rejected");
            err
        })?;

        info!(
            session_id = %session.id(),
            exercise = session.exercise_name(),
            "Workout session started"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutStore;
    use crate::domain::foundation::{WorkoutSessionId, WorkoutStatus};
    use crate::domain::user::NewUser;
    use crate::ports::UserRepository;

    async fn setup() -> (Arc<InMemoryWorkoutStore>, StartWorkoutHandler, UserId) {
        let store = Arc::new(InMemoryWorkoutStore::new());
        let user = UserRepository::create(
            store.as_ref(),
            &NewUser::new("Ada", None, Timestamp::now()).unwrap(),
        )
        .await
        .unwrap();
        let handler = StartWorkoutHandler::new(store.clone());
        (store, handler, user.id())
    }

    fn command(user_id: UserId, assigned_reps: i32) -> StartWorkoutCommand {
        StartWorkoutCommand {
            user_id,
            exercise_name: Some("Push-ups".to_string()),
            assigned_reps,
        }
    }

    #[tokio::test]
    async fn starts_active_session() {
        let (_, handler, user_id) = setup().await;

        let session = handler.handle(command(user_id, 10)).await.unwrap();

        assert_eq!(session.id(), WorkoutSessionId::new(1));
        assert_eq!(session.status(), WorkoutStatus::Active);
        assert_eq!(session.assigned_reps(), 10);
        assert_eq!(session.completed_reps(), None);
    }

    #[tokio::test]
    async fn second_start_conflicts_with_active_session() {
        let (_, handler, user_id) = setup().await;
        let first = handler.handle(command(user_id, 10)).await.unwrap();

        let err = handler.handle(command(user_id, 8)).await.unwrap_err();

        assert_eq!(
            err,
            WorkoutError::ActiveSessionExists {
                user_id,
                active_session_id: Some(first.id()),
            }
        );
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (_, handler, _) = setup().await;
        let err = handler.handle(command(UserId::new(42), 10)).await.unwrap_err();
        assert_eq!(err, WorkoutError::UserNotFound(UserId::new(42)));
    }

    #[tokio::test]
    async fn zero_assigned_reps_is_validation_error() {
        let (store, handler, user_id) = setup().await;
        let err = handler.handle(command(user_id, 0)).await.unwrap_err();

        assert!(matches!(
            err,
            WorkoutError::ValidationFailed { ref field, .. } if field == "assigned_reps"
        ));
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn concurrent_starts_allow_only_one_active_session() {
        let (store, handler, user_id) = setup().await;
        let handler = Arc::new(handler);

        let attempts = (0..8).map(|_| {
            let handler = handler.clone();
            tokio::spawn(async move { handler.handle(command(user_id, 10)).await })
        });
        let results = collect_results(attempts.collect()).await;

        let ok = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(WorkoutError::ActiveSessionExists { .. })))
            .count();
        assert_eq!(ok, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(store.session_count().await, 1);
    }

    async fn collect_results(
        handles: Vec<tokio::task::JoinHandle<Result<WorkoutSession, WorkoutError>>>,
    ) -> Vec<Result<WorkoutSession, WorkoutError>> {
        let mut out = Vec::with_capacity(handles.len());
        for handle in handles {
            out.push(handle.await.unwrap());
        }
        out
    }
}
