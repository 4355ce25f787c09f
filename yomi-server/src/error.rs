//! Error types for yomi-server
//!
//! Only two error classes cross the service boundary: bad requests (client's
//! fault, 400) and tokenizer unavailability (a dependency of the request,
//! 503). Cache and verification failures never reach here; the core absorbs
//! them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use yomi_core::TokenizeError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Segmentation engine could not serve the request (503)
    #[error(transparent)]
    Tokenizer(#[from] TokenizeError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Tokenizer(ref err) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "TOKENIZER_UNAVAILABLE",
                err.to_string(),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
