//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with DTOs, handlers and a router. All
//! resource routers share [`AppState`] and are mounted under `/api/v1` by
//! [`app_router`], which also applies the cross-cutting layers.

pub mod envelope;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod recommendations;
pub mod state;
pub mod users;
pub mod workouts;

use std::time::Duration;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use envelope::{ApiError, ApiResponse, ErrorDetail};
pub use recommendations::recommendation_router;
pub use state::AppState;
pub use users::user_router;
pub use workouts::workout_router;

use middleware::REQUEST_ID_HEADER;

/// Settings for the outer HTTP layers.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the complete application router.
pub fn app_router(state: AppState, config: &RouterConfig) -> Router {
    let api = Router::new()
        .merge(user_router())
        .merge(workout_router())
        .merge(recommendation_router());

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .fallback(route_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(axum::middleware::from_fn(middleware::process_time))
                .layer(middleware::cors_layer(&config.cors_origins))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
}

fn make_span(request: &Request) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

async fn route_not_found(ctx: extract::RequestContext) -> impl IntoResponse {
    ctx.error(ApiError::new(
        StatusCode::NOT_FOUND,
        ErrorDetail {
            code: "NOT_FOUND".to_string(),
            message: "Resource not found".to_string(),
            field: None,
            active_session_id: None,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutStore;
    use axum::body::Body;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        app_router(
            AppState::in_memory(InMemoryWorkoutStore::new()),
            &RouterConfig::default(),
        )
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_service_info() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Workout Tracking API");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn health_is_healthy() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn responses_carry_request_id_and_timing() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let request_id = response.headers().get("x-request-id").unwrap();
        assert_eq!(request_id.to_str().unwrap().len(), 36);
        let elapsed: f64 = response
            .headers()
            .get("x-process-time")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(elapsed >= 0.0);
    }

    #[tokio::test]
    async fn error_envelope_echoes_request_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/12")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let header = response
            .headers()
            .get("x-request-id")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = body_json(response).await;
        assert_eq!(body["meta"]["request_id"], header.as_str());
    }

    #[tokio::test]
    async fn unknown_route_is_enveloped_404() {
        let response = app()
            .oneshot(Request::builder().uri("/api/v2/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"][0]["code"], "NOT_FOUND");
    }
}
