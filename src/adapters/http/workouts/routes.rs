//! Route configuration for workout session endpoints.

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{end_workout, get_workout, list_user_workouts, log_exercise, start_workout};
use crate::adapters::http::state::AppState;

/// Creates the workout router.
///
/// Routes:
/// - `POST /users/:user_id/workouts` - Start a session
/// - `GET /users/:user_id/workouts` - Session history
/// - `GET /workouts/:session_id` - Session details
/// - `PATCH /workouts/:session_id/log` - Record completed reps
/// - `PATCH /workouts/:session_id/end` - Finish the session
pub fn workout_router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id/workouts",
            post(start_workout).get(list_user_workouts),
        )
        .route("/workouts/:session_id", get(get_workout))
        .route("/workouts/:session_id/log", patch(log_exercise))
        .route("/workouts/:session_id/end", patch(end_workout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::NewUser;
    use crate::ports::UserRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn app_with_user() -> Router {
        let store = InMemoryWorkoutStore::new();
        UserRepository::create(&store, &NewUser::new("Ada", None, Timestamp::now()).unwrap())
            .await
            .unwrap();
        workout_router().with_state(AppState::in_memory(store))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn start_returns_links() {
        let app = app_with_user().await;

        let (status, body) = send(
            &app,
            "POST",
            "/users/1/workouts",
            Some(r#"{"assigned_reps": 10}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "active");
        assert_eq!(body["data"]["exercise"]["exercise_name"], "Push-ups");
        assert!(body["data"]["exercise"]["completed_reps"].is_null());
        assert_eq!(body["links"]["log"], "/api/v1/workouts/1/log");
        assert_eq!(body["links"]["end"], "/api/v1/workouts/1/end");
    }

    #[tokio::test]
    async fn second_start_conflicts_with_active_id() {
        let app = app_with_user().await;
        send(&app, "POST", "/users/1/workouts", Some(r#"{"assigned_reps": 10}"#)).await;

        let (status, body) = send(
            &app,
            "POST",
            "/users/1/workouts",
            Some(r#"{"assigned_reps": 5}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["errors"][0]["code"], "ACTIVE_SESSION_EXISTS");
        assert_eq!(body["errors"][0]["active_session_id"], 1);
    }

    #[tokio::test]
    async fn start_for_unknown_user_is_404() {
        let app = app_with_user().await;
        let (status, body) = send(
            &app,
            "POST",
            "/users/42/workouts",
            Some(r#"{"assigned_reps": 10}"#),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errors"][0]["code"], "USER_NOT_FOUND");
    }

    #[tokio::test]
    async fn zero_assigned_reps_is_422() {
        let app = app_with_user().await;
        let (status, body) = send(
            &app,
            "POST",
            "/users/1/workouts",
            Some(r#"{"assigned_reps": 0}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "assigned_reps");
    }

    #[tokio::test]
    async fn missing_body_field_is_422() {
        let app = app_with_user().await;
        let (status, body) = send(&app, "POST", "/users/1/workouts", Some("{}")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn end_before_log_is_409() {
        let app = app_with_user().await;
        send(&app, "POST", "/users/1/workouts", Some(r#"{"assigned_reps": 10}"#)).await;

        let (status, body) = send(&app, "PATCH", "/workouts/1/end", None).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["errors"][0]["code"], "EXERCISE_NOT_LOGGED");
    }

    #[tokio::test]
    async fn log_then_end_reports_summary() {
        let app = app_with_user().await;
        send(&app, "POST", "/users/1/workouts", Some(r#"{"assigned_reps": 10}"#)).await;

        let (status, body) = send(
            &app,
            "PATCH",
            "/workouts/1/log",
            Some(r#"{"completed_reps": 10}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Exercise logged successfully");
        assert_eq!(body["data"]["exercise"]["completion_percentage"], 100.0);

        let (status, body) = send(&app, "PATCH", "/workouts/1/end", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["summary"]["performance"], "completed");
        assert_eq!(body["data"]["summary"]["next_recommended_reps"], 12);
        assert_eq!(body["message"], "Workout completed! Next workout: 12 reps");

        let (status, body) = send(&app, "PATCH", "/workouts/1/end", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["errors"][0]["code"], "SESSION_NOT_ACTIVE");
    }

    #[tokio::test]
    async fn negative_log_is_422() {
        let app = app_with_user().await;
        send(&app, "POST", "/users/1/workouts", Some(r#"{"assigned_reps": 10}"#)).await;

        let (status, _) = send(
            &app,
            "PATCH",
            "/workouts/1/log",
            Some(r#"{"completed_reps": -1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_session_is_404() {
        let app = app_with_user().await;
        let (status, body) = send(&app, "GET", "/workouts/77", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errors"][0]["code"], "WORKOUT_SESSION_NOT_FOUND");
        assert_eq!(body["errors"][0]["field"], "session_id");
    }

    #[tokio::test]
    async fn history_filters_by_status() {
        let app = app_with_user().await;
        send(&app, "POST", "/users/1/workouts", Some(r#"{"assigned_reps": 10}"#)).await;
        send(&app, "PATCH", "/workouts/1/log", Some(r#"{"completed_reps": 3}"#)).await;
        send(&app, "PATCH", "/workouts/1/end", None).await;
        send(&app, "POST", "/users/1/workouts", Some(r#"{"assigned_reps": 9}"#)).await;

        let (status, body) = send(&app, "GET", "/users/1/workouts?status=ended", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["status"], "ended");

        let (_, body) = send(&app, "GET", "/users/1/workouts?status_filter=completed", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (_, body) = send(&app, "GET", "/users/1/workouts", None).await;
        assert_eq!(body["meta"]["pagination"]["total_items"], 2);
        assert_eq!(body["data"][0]["id"], 2);
    }
}
