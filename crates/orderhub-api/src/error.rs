//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use orderhub_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiErrorResponse;

/// Newtype so `AppError` (defined in orderhub-core) can carry an axum
/// `IntoResponse` impl from this crate.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let AppError { kind, message, .. } = self.0;

        // Authentication and authorization failures get fixed generic
        // messages so no verification detail leaks to the caller.
        let (status, error_code, message) = match kind {
            ErrorKind::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Access denied: missing or invalid credential".to_string(),
            ),
            ErrorKind::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied: admin role required".to_string(),
            ),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ErrorKind::Database => {
                tracing::error!(error = %message, "Directory error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DIRECTORY_ERROR",
                    "Internal error".to_string(),
                )
            }
            ErrorKind::ExchangeFailed | ErrorKind::InvalidIdentityToken => {
                tracing::warn!(error = %message, "Provider interaction failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    "Login with the identity provider failed".to_string(),
                )
            }
            _ => {
                tracing::error!(error = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal error".to_string(),
                )
            }
        };

        let body = ApiErrorResponse {
            success: false,
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
