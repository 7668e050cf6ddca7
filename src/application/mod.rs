//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // User handlers
    CreateUserCommand, CreateUserHandler, GetUserHandler, GetUserQuery, ListUsersHandler,
    ListUsersQuery, UserDetail, UserStats,
    // Workout handlers
    EndWorkoutCommand, EndWorkoutHandler, EndWorkoutResult, GetWorkoutHandler, GetWorkoutQuery,
    ListUserWorkoutsHandler, ListUserWorkoutsQuery, LogExerciseCommand, LogExerciseHandler,
    StartWorkoutCommand, StartWorkoutHandler,
    // Recommendation handlers
    GetRecommendationHandler, GetRecommendationQuery, Progression, RecommendationView,
};
