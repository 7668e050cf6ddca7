//! HTTP handlers for workout session endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::application::{
    EndWorkoutCommand, GetWorkoutQuery, ListUserWorkoutsQuery, LogExerciseCommand,
    StartWorkoutCommand,
};
use crate::domain::foundation::{UserId, WorkoutSessionId};

use super::dto::{
    end_link, log_link, ExerciseLogResponse, ListWorkoutsParams, LogExerciseRequest,
    StartWorkoutRequest, WorkoutEndResponse, WorkoutSessionResponse,
};
use crate::adapters::http::envelope::{ApiError, ApiResponse, PaginationMeta};
use crate::adapters::http::extract::{ApiJson, ApiPath, ApiQuery, RequestContext};
use crate::adapters::http::state::AppState;

/// POST /api/v1/users/:user_id/workouts - Start a session
pub async fn start_workout(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiPath(user_id): ApiPath<UserId>,
    ApiJson(request): ApiJson<StartWorkoutRequest>,
) -> Result<Response, ApiError> {
    let cmd = StartWorkoutCommand {
        user_id,
        exercise_name: request.exercise_name,
        assigned_reps: request.assigned_reps,
    };

    let session = state
        .start_workout_handler()
        .handle(cmd)
        .await
        .map_err(|e| ctx.error(e))?;

    let body = ApiResponse::ok(WorkoutSessionResponse::from(&session))
        .with_link("log", log_link(session.id()))
        .with_link("end", end_link(session.id()));

    Ok(ctx.respond(StatusCode::CREATED, body))
}

/// GET /api/v1/users/:user_id/workouts - Session history
pub async fn list_user_workouts(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiPath(user_id): ApiPath<UserId>,
    ApiQuery(params): ApiQuery<ListWorkoutsParams>,
) -> Result<Response, ApiError> {
    let query = ListUserWorkoutsQuery {
        user_id,
        options: params.into_options(),
    };

    let page = state
        .list_user_workouts_handler()
        .handle(query)
        .await
        .map_err(|e| ctx.error(e))?;

    let pagination = PaginationMeta::from_page(&page);
    let sessions: Vec<WorkoutSessionResponse> =
        page.items.iter().map(WorkoutSessionResponse::from).collect();

    Ok(ctx.respond(
        StatusCode::OK,
        ApiResponse::ok(sessions).with_pagination(pagination),
    ))
}

/// GET /api/v1/workouts/:session_id - Session details
pub async fn get_workout(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiPath(session_id): ApiPath<WorkoutSessionId>,
) -> Result<Response, ApiError> {
    let session = state
        .get_workout_handler()
        .handle(GetWorkoutQuery { session_id })
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(ctx.respond(
        StatusCode::OK,
        ApiResponse::ok(WorkoutSessionResponse::from(&session)),
    ))
}

/// PATCH /api/v1/workouts/:session_id/log - Record completed reps
pub async fn log_exercise(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiPath(session_id): ApiPath<WorkoutSessionId>,
    ApiJson(request): ApiJson<LogExerciseRequest>,
) -> Result<Response, ApiError> {
    let cmd = LogExerciseCommand {
        session_id,
        completed_reps: request.completed_reps,
    };

    let session = state
        .log_exercise_handler()
        .handle(cmd)
        .await
        .map_err(|e| ctx.error(e))?;

    Ok(ctx.respond(
        StatusCode::OK,
        ApiResponse::ok(ExerciseLogResponse::from(&session))
            .with_message("Exercise logged successfully"),
    ))
}

/// PATCH /api/v1/workouts/:session_id/end - Finish the session
pub async fn end_workout(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiPath(session_id): ApiPath<WorkoutSessionId>,
) -> Result<Response, ApiError> {
    let result = state
        .end_workout_handler()
        .handle(EndWorkoutCommand { session_id })
        .await
        .map_err(|e| ctx.error(e))?;

    let message = format!(
        "Workout completed! Next workout: {} reps",
        result.recommendation.recommended_reps()
    );

    Ok(ctx.respond(
        StatusCode::OK,
        ApiResponse::ok(WorkoutEndResponse::from(&result)).with_message(message),
    ))
}
