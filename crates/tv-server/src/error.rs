//! API error responses
//!
//! Every failure on the vendor load path is a server-side fault. The body
//! is a short `{"detail": ...}` message; internal paths and backtraces
//! never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use tv_dataset::DatasetError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Application error that converts to an HTTP response.
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorDetail {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<DatasetError> for ApiErrorResponse {
    fn from(err: DatasetError) -> Self {
        // NotFound, Corrupt, and Validation all surface as 500s: the
        // dataset is a server-side artifact, so none of them are the
        // client's fault.
        ApiErrorResponse::internal_error(err.to_string())
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiErrorResponse>;
