use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    tracing::debug!(error_code = ErrorCode::NotFound.code(), "Route not found");
    error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound.default_message())
}
