//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod recommendation;
pub mod user;
pub mod workout;

pub use recommendation::{
    GetRecommendationHandler, GetRecommendationQuery, Progression, RecommendationView,
};
pub use user::{
    CreateUserCommand, CreateUserHandler, GetUserHandler, GetUserQuery, ListUsersHandler,
    ListUsersQuery, UserDetail, UserStats,
};
pub use workout::{
    EndWorkoutCommand, EndWorkoutHandler, EndWorkoutResult, GetWorkoutHandler, GetWorkoutQuery,
    ListUserWorkoutsHandler, ListUserWorkoutsQuery, LogExerciseCommand, LogExerciseHandler,
    StartWorkoutCommand, StartWorkoutHandler,
};
