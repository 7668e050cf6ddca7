//! HTTP handlers for user endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::application::{CreateUserCommand, GetUserQuery, ListUsersQuery};
use crate::domain::foundation::UserId;

use super::dto::{CreateUserRequest, ListUsersParams, UserDetailResponse, UserResponse};
use crate::adapters::http::envelope::{ApiError, ApiResponse, PaginationMeta};
use crate::adapters::http::extract::{ApiJson, ApiPath, ApiQuery, RequestContext};
use crate::adapters::http::state::AppState;

/// POST /api/v1/users - Register a user
pub async fn create_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<Response, ApiError> {
    let cmd = CreateUserCommand {
        name: request.name,
        email: request.email,
    };

    let user = state
        .create_user_handler()
        .handle(cmd)
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(ctx.respond(
        StatusCode::CREATED,
        ApiResponse::ok(UserResponse::new(&user, 0)),
    ))
}

/// GET /api/v1/users/:user_id - User with workout statistics
pub async fn get_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Response, ApiError> {
    let detail = state
        .get_user_handler()
        .handle(GetUserQuery { user_id })
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(ctx.respond(
        StatusCode::OK,
        ApiResponse::ok(UserDetailResponse::from(detail)),
    ))
}

/// GET /api/v1/users - Paginated user listing
pub async fn list_users(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiQuery(params): ApiQuery<ListUsersParams>,
) -> Result<Response, ApiError> {
    let page = state
        .list_users_handler()
        .handle(ListUsersQuery {
            options: params.into_options(),
        })
        .await
        .map_err(|e| ctx.error(e))?;

    let pagination = PaginationMeta::from_page(&page);
    let users: Vec<UserResponse> = page.items.into_iter().map(UserResponse::from).collect();

    Ok(ctx.respond(
        StatusCode::OK,
        ApiResponse::ok(users).with_pagination(pagination),
    ))
}
