use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: message.into(),
            timestamp: timestamp(),
        })
    }

    pub fn empty(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: message.into(),
            timestamp: timestamp(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub details: Option<Value>,
    pub timestamp: String,
}

#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn not_found(kind: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            kind,
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn bad_request(kind: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind,
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn internal(kind: &'static str, message: impl Into<String>, cause: &nl_core::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind,
            message: message.into(),
            details: Some(json!({ "error": cause.to_string() })),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("{} ({}): {:?}", self.kind, self.message, self.details);
        }
        let body = ErrorResponse {
            success: false,
            error: self.kind.to_string(),
            message: self.message,
            details: self.details,
            timestamp: timestamp(),
        };
        (self.status, Json(body)).into_response()
    }
}
