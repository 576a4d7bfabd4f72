//! API error types and conversions

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docuparse_core::{ErrorResponse, ValidationDetail};

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 422 Unprocessable Entity (request body failed validation)
    Validation { field: String, message: String },
    /// 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    /// Build a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation errors carry a field-level detail list
        if let ApiError::Validation { field, message } = self {
            tracing::debug!(field = %field, %message, "Request validation failed");

            let body = Json(ErrorResponse {
                error: "validation_error".to_string(),
                message: message.clone(),
                detail: Some(vec![ValidationDetail { field, message }]),
            });

            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }

        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Validation { .. } => unreachable!(), // Handled above
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        // Log errors at appropriate levels
        if status.is_server_error() {
            tracing::error!(error = error_type, %message, "API error");
        } else if status.is_client_error() {
            tracing::debug!(error = error_type, %message, "API client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            detail: None,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation("body", rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::validation("body", rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::validation("body", err.body_text())
    }
}
