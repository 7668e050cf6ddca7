//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Write Ports
//!
//! - `UserRepository` - User creation and lookup
//! - `WorkoutSessionRepository` - Session start, log and atomic completion
//!
//! ## Read Ports
//!
//! - `UserReader` - Paginated user listings
//! - `WorkoutSessionReader` - Session history and counters
//! - `RecommendationReader` - Current recommendation per user

mod listing;
mod recommendation_reader;
mod user_reader;
mod user_repository;
mod workout_session_reader;
mod workout_session_repository;

pub use listing::{
    Page, PageRequest, SortOrder, StatusFilter, UserListOptions, UserSortField,
    WorkoutListOptions, WorkoutSortField, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use recommendation_reader::{RecommendationReader, RecommendationSnapshot};
pub use user_reader::{UserReader, UserSummary};
pub use user_repository::UserRepository;
pub use workout_session_reader::{WorkoutCounts, WorkoutSessionReader};
pub use workout_session_repository::WorkoutSessionRepository;
