//! The only two conditions this service treats as recoverable errors at the HTTP boundary —
//! everything else (unknown language, empty code, ill-formed syntax trees, ambiguous
//! recurrences) is represented as data, not an `Err`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON")]
    InvalidJson,
    #[error("json encode failed")]
    EncodeFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::EncodeFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
