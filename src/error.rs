// Request-level errors and their HTTP mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Any of these aborts the whole request; there are no partial results.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::DatasetUnavailable(_) | ApiError::MalformedRecord { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
