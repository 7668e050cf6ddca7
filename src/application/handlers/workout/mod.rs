//! Workout session command and query handlers.

mod end_workout;
mod get_workout;
mod list_user_workouts;
mod log_exercise;
mod start_workout;

pub use end_workout::{EndWorkoutCommand, EndWorkoutHandler, EndWorkoutResult};
pub use get_workout::{GetWorkoutHandler, GetWorkoutQuery};
pub use list_user_workouts::{ListUserWorkoutsHandler, ListUserWorkoutsQuery};
pub use log_exercise::{LogExerciseCommand, LogExerciseHandler};
pub use start_workout::{StartWorkoutCommand, StartWorkoutHandler};
