//! Shared application state for the HTTP adapter.

use std::sync::Arc;

use crate::adapters::memory::InMemoryWorkoutStore;
use crate::application::{
    CreateUserHandler, EndWorkoutHandler, GetRecommendationHandler, GetUserHandler,
    GetWorkoutHandler, ListUserWorkoutsHandler, ListUsersHandler, LogExerciseHandler,
    StartWorkoutHandler,
};
use crate::ports::{
    RecommendationReader, UserReader, UserRepository, WorkoutSessionReader,
    WorkoutSessionRepository,
};

/// Port implementations the handlers are built from.
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub user_reader: Arc<dyn UserReader>,
    pub session_repository: Arc<dyn WorkoutSessionRepository>,
    pub session_reader: Arc<dyn WorkoutSessionReader>,
    pub recommendation_reader: Arc<dyn RecommendationReader>,
}

impl AppState {
    /// State backed by one in-memory store serving every port.
    pub fn in_memory(store: InMemoryWorkoutStore) -> Self {
        let store = Arc::new(store);
        Self {
            user_repository: store.clone(),
            user_reader: store.clone(),
            session_repository: store.clone(),
            session_reader: store.clone(),
            recommendation_reader: store,
        }
    }

    pub fn create_user_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.user_repository.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(
            self.user_repository.clone(),
            self.session_reader.clone(),
            self.recommendation_reader.clone(),
        )
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.user_reader.clone())
    }

    pub fn start_workout_handler(&self) -> StartWorkoutHandler {
        StartWorkoutHandler::new(self.session_repository.clone())
    }

    pub fn log_exercise_handler(&self) -> LogExerciseHandler {
        LogExerciseHandler::new(self.session_repository.clone())
    }

    pub fn end_workout_handler(&self) -> EndWorkoutHandler {
        EndWorkoutHandler::new(self.session_repository.clone())
    }

    pub fn get_workout_handler(&self) -> GetWorkoutHandler {
        GetWorkoutHandler::new(self.session_repository.clone())
    }

    pub fn list_user_workouts_handler(&self) -> ListUserWorkoutsHandler {
        ListUserWorkoutsHandler::new(self.user_repository.clone(), self.session_reader.clone())
    }

    pub fn get_recommendation_handler(&self) -> GetRecommendationHandler {
        GetRecommendationHandler::new(self.recommendation_reader.clone())
    }
}
