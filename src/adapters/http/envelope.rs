//! Response envelope shared by every endpoint.
//!
//! Success and failure bodies have the same outer shape:
//! `{success, data, errors, meta: {timestamp, request_id, pagination?}, message?, links?}`.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{ErrorCategory, ErrorCode, Timestamp, WorkoutSessionId};
use crate::domain::user::UserError;
use crate::domain::workout::WorkoutError;
use crate::ports::Page;

/// Message returned for internal failures; details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

// ════════════════════════════════════════════════════════════════════════════════
// Envelope
// ════════════════════════════════════════════════════════════════════════════════

/// Pagination block for list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl PaginationMeta {
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self {
            current_page: page.request.page(),
            total_pages: page.total_pages(),
            total_items: page.total,
            items_per_page: page.request.limit(),
        }
    }
}

/// Envelope metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMeta {
    pub timestamp: String,
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl ResponseMeta {
    fn now() -> Self {
        Self {
            timestamp: Timestamp::now().to_rfc3339(),
            request_id: None,
            pagination: None,
        }
    }
}

/// A single error entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_session_id: Option<WorkoutSessionId>,
}

impl ErrorDetail {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            message: message.into(),
            field: None,
            active_session_id: None,
        }
    }

    pub fn with_field(mut self, field: Option<&str>) -> Self {
        self.field = field.map(str::to_string);
        self
    }
}

/// The JSON envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub errors: Option<Vec<ErrorDetail>>,
    pub meta: ResponseMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, String>>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: None,
            meta: ResponseMeta::now(),
            message: None,
            links: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_link(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.links
            .get_or_insert_with(BTreeMap::new)
            .insert(rel.to_string(), href.into());
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationMeta) -> Self {
        self.meta.pagination = Some(pagination);
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.meta.request_id = request_id;
        self
    }
}

impl ApiResponse<()> {
    /// Failed envelope: `data` is null and `errors` is populated.
    pub fn failure(errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            data: None,
            errors: Some(errors),
            meta: ResponseMeta::now(),
            message: None,
            links: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Maps an error category to its HTTP status.
pub fn status_for(category: ErrorCategory) -> StatusCode {
    match category {
        ErrorCategory::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCategory::NotFound => StatusCode::NOT_FOUND,
        ErrorCategory::Conflict => StatusCode::CONFLICT,
        ErrorCategory::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// API error rendered as a failed envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    errors: Vec<ErrorDetail>,
    request_id: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: ErrorDetail) -> Self {
        Self {
            status,
            errors: vec![detail],
            request_id: None,
        }
    }

    /// 422 with a `VALIDATION_ERROR` entry.
    pub fn validation(field: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorDetail::new(ErrorCode::ValidationFailed, message).with_field(field),
        )
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    fn from_category(
        category: ErrorCategory,
        code: ErrorCode,
        message: String,
        field: Option<&str>,
    ) -> Self {
        let detail = match category {
            ErrorCategory::Internal => {
                tracing::error!(code = code.as_str(), error = %message, "Request failed");
                ErrorDetail::new(code, INTERNAL_ERROR_MESSAGE)
            }
            ErrorCategory::Unavailable => {
                tracing::warn!(error = %message, "Store unavailable");
                ErrorDetail::new(code, "Service temporarily unavailable")
            }
            _ => ErrorDetail::new(code, message).with_field(field),
        };
        Self::new(status_for(category), detail)
    }
}

impl From<WorkoutError> for ApiError {
    fn from(err: WorkoutError) -> Self {
        let mut api = Self::from_category(err.category(), err.code(), err.message(), err.field());
        if let Some(detail) = api.errors.first_mut() {
            detail.active_session_id = err.active_session_id();
        }
        api
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self::from_category(err.category(), err.code(), err.message(), err.field())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::failure(self.errors).with_request_id(self.request_id);
        (self.status, Json(body)).into_response()
    }
}
