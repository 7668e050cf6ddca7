//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` / `PostgresUserReader` - Users and listings
//! - `PostgresWorkoutSessionRepository` - Session lifecycle writes
//! - `PostgresWorkoutSessionReader` - History, counters and progression queries
//! - `PostgresRecommendationReader` - Stored recommendations

mod recommendation_reader;
mod rows;
mod user_reader;
mod user_repository;
mod workout_session_reader;
mod workout_session_repository;

pub use recommendation_reader::PostgresRecommendationReader;
pub use user_reader::PostgresUserReader;
pub use user_repository::PostgresUserRepository;
pub use workout_session_reader::PostgresWorkoutSessionReader;
pub use workout_session_repository::PostgresWorkoutSessionRepository;

use std::sync::Arc;

use sqlx::migrate::Migrator;
use sqlx::PgPool;

use crate::adapters::http::AppState;

/// Schema migrations embedded from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// HTTP state backed by PostgreSQL adapters sharing one pool.
pub fn app_state(pool: PgPool) -> AppState {
    AppState {
        user_repository: Arc::new(PostgresUserRepository::new(pool.clone())),
        user_reader: Arc::new(PostgresUserReader::new(pool.clone())),
        session_repository: Arc::new(PostgresWorkoutSessionRepository::new(pool.clone())),
        session_reader: Arc::new(PostgresWorkoutSessionReader::new(pool.clone())),
        recommendation_reader: Arc::new(PostgresRecommendationReader::new(pool)),
    }
}
