//! Route configuration for user endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_user, get_user, list_users};
use crate::adapters::http::state::AppState;

/// Creates the user router.
///
/// Routes:
/// - `POST /users` - Register a user
/// - `GET /users` - List users
/// - `GET /users/:user_id` - User with statistics
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:user_id", get(get_user))
}
