//! HTTP adapter for rep recommendations.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::recommendation_router;
