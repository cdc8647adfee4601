use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps body decoding failures to 400 and store failures to 500, both
/// rendered as a JSON `ErrorResponse`. A key segment that cannot be decoded
/// gets a bare 400, like the router's own empty-bodied 404/405.
#[derive(Debug)]
pub enum ApiError {
    /// Key segment of the path could not be decoded
    InvalidPath(PathRejection),
    /// Request body is not a JSON object of strings
    JsonError(serde_json::Error),
    /// The store reported a failure
    StoreError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidPath(rejection) => {
                tracing::debug!("Rejected request path: {}", rejection.body_text());
                return StatusCode::BAD_REQUEST.into_response();
            }
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("JSON parse error: {}", err),
            ),
            ApiError::StoreError(err) => {
                tracing::error!("Store operation failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Store error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreError(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
