//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, status, errors)
//! - `user` - User aggregate and creation rules
//! - `workout` - Workout session lifecycle (start, log, end)
//! - `recommendation` - Rep progression rule and per-user record

pub mod foundation;
pub mod recommendation;
pub mod user;
pub mod workout;
