//! Route configuration for recommendation endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::get_recommendation;
use crate::adapters::http::state::AppState;

/// Creates the recommendation router.
///
/// Routes:
/// - `GET /users/:user_id/recommendations` - Next target for a user
pub fn recommendation_router() -> Router<AppState> {
    Router::new().route("/users/:user_id/recommendations", get(get_recommendation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::NewUser;
    use crate::domain::workout::NewWorkoutSession;
    use crate::ports::{UserRepository, WorkoutSessionRepository};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn new_user_gets_initial_recommendation() {
        let store = InMemoryWorkoutStore::new();
        UserRepository::create(&store, &NewUser::new("Ada", None, Timestamp::now()).unwrap())
            .await
            .unwrap();
        let app = recommendation_router().with_state(AppState::in_memory(store));

        let (status, body) = get(app, "/users/1/recommendations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["recommended_reps"], 1);
        assert_eq!(body["data"]["recommendation_reason"], "No workout history yet");
        assert!(body["data"]["last_workout"].is_null());
        assert_eq!(body["data"]["progression"]["trend"], "initial");
        assert_eq!(body["data"]["progression"]["sessions_count"], 0);
    }

    #[tokio::test]
    async fn reflects_last_ended_session() {
        let store = InMemoryWorkoutStore::new();
        let user = UserRepository::create(
            &store,
            &NewUser::new("Ada", None, Timestamp::now()).unwrap(),
        )
        .await
        .unwrap();
        let mut session = WorkoutSessionRepository::create(
            &store,
            &NewWorkoutSession::new(user.id(), Some("Squats".to_string()), 8, Timestamp::now())
                .unwrap(),
        )
        .await
        .unwrap();
        session.log(5).unwrap();
        store.record_log(&session).await.unwrap();
        store.end_session(session.id(), Timestamp::now()).await.unwrap();
        let app = recommendation_router().with_state(AppState::in_memory(store));

        let (status, body) = get(app, "/users/1/recommendations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["recommended_reps"], 7);
        assert_eq!(
            body["data"]["recommendation_reason"],
            "Did not complete all reps in last session"
        );
        assert_eq!(body["data"]["last_workout"]["session_id"], 1);
        assert_eq!(body["data"]["last_workout"]["completed_reps"], 5);
        assert_eq!(body["data"]["progression"]["trend"], "regressing");
        assert_eq!(body["data"]["progression"]["total_increase"], -1);
    }

    #[tokio::test]
    async fn unknown_user_is_404() {
        let app = recommendation_router()
            .with_state(AppState::in_memory(InMemoryWorkoutStore::new()));

        let (status, body) = get(app, "/users/5/recommendations").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errors"][0]["code"], "USER_NOT_FOUND");
    }
}
