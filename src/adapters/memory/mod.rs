//! In-memory persistence adapter.

mod workout_store;

pub use workout_store::InMemoryWorkoutStore;
