//! HTTP handlers for recommendation endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::application::GetRecommendationQuery;
use crate::domain::foundation::UserId;

use super::dto::RecommendationResponse;
use crate::adapters::http::envelope::{ApiError, ApiResponse};
use crate::adapters::http::extract::{ApiPath, RequestContext};
use crate::adapters::http::state::AppState;

/// GET /api/v1/users/:user_id/recommendations - Next target for a user
pub async fn get_recommendation(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Response, ApiError> {
    let view = state
        .get_recommendation_handler()
        .handle(GetRecommendationQuery { user_id })
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(ctx.respond(
        StatusCode::OK,
        ApiResponse::ok(RecommendationResponse::from(view)),
    ))
}
