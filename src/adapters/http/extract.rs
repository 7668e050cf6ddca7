//! Request extractors that report rejections through the envelope.
//!
//! Axum's stock extractors answer malformed input with plain-text 400/415
//! responses. These wrappers turn every rejection into a 422
//! `VALIDATION_ERROR` envelope carrying the request id.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::envelope::{ApiError, ApiResponse};
use super::middleware::REQUEST_ID_HEADER;

fn request_id_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

// ════════════════════════════════════════════════════════════════════════════════
// Request context
// ════════════════════════════════════════════════════════════════════════════════

/// Per-request data every handler echoes back in the envelope.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    request_id: Option<String>,
}

impl RequestContext {
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Renders a success envelope with the request id filled in.
    pub fn respond<T: Serialize>(&self, status: StatusCode, body: ApiResponse<T>) -> Response {
        (status, body.with_request_id(self.request_id.clone())).into_response()
    }

    /// Converts a handler error, attaching the request id.
    pub fn error(&self, err: impl Into<ApiError>) -> ApiError {
        err.into().with_request_id(self.request_id.clone())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            request_id: request_id_from(&parts.headers),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Validating extractors
// ════════════════════════════════════════════════════════════════════════════════

/// JSON body extractor.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = request_id_from(req.headers());
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(ApiError::validation(Some("body"), rejection.body_text())
                    .with_request_id(request_id))
            }
        }
    }
}

/// Path parameter extractor.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(ApiError::validation(Some("path"), rejection.body_text())
                .with_request_id(request_id_from(&parts.headers))),
        }
    }
}

/// Query string extractor.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(ApiError::validation(Some("query"), rejection.body_text())
                .with_request_id(request_id_from(&parts.headers))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        reps: i32,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .header(REQUEST_ID_HEADER, "req-42")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_json_is_extracted() {
        let ApiJson(payload) = ApiJson::<Payload>::from_request(json_request(r#"{"reps": 5}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.reps, 5);
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let err = ApiJson::<Payload>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.errors()[0].code, "VALIDATION_ERROR");
        assert_eq!(err.errors()[0].field.as_deref(), Some("body"));
    }

    #[tokio::test]
    async fn wrong_type_is_a_validation_error() {
        let err = ApiJson::<Payload>::from_request(json_request(r#"{"reps": "five"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn context_reads_request_id_header() {
        let (mut parts, _) = json_request("{}").into_parts();
        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.request_id(), Some("req-42"));
    }
}
