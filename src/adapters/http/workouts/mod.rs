//! HTTP adapter for the workout session lifecycle.
//!
//! Sessions are started under a user and then addressed directly by id for
//! logging, ending and lookup.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::workout_router;
