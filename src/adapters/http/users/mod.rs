//! HTTP adapter for user registration and lookup.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::user_router;
