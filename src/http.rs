//! The route table and request/response plumbing around the analyzer. Built on `axum` over
//! `tokio`. The router is an owned value built once in `main` and handed to the listener —
//! there is no process-wide route table.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::analyze::parse_code;
use crate::error::ApiError;

/// Raw request fields as whatever JSON value the client sent — `language`/`code` may be absent,
/// `null`, or the wrong type, and all three fall back to the default rather than failing the
/// request. Only a string value is ever accepted as-is.
#[derive(Debug, Deserialize, Default)]
struct ParseRequest {
    #[serde(default)]
    language: serde_json::Value,
    #[serde(default)]
    code: serde_json::Value,
}

impl ParseRequest {
    fn language(&self) -> &str {
        self.language.as_str().unwrap_or("c")
    }

    fn code(&self) -> &str {
        self.code.as_str().unwrap_or("")
    }
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_parse(body: Bytes) -> Response {
    let request: ParseRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::debug!("handle_parse: invalid request JSON: {err}");
            return ApiError::InvalidJson.into_response();
        }
    };

    let result = parse_code(request.language(), request.code());

    match serde_json::to_vec(&result) {
        Ok(bytes) => {
            (StatusCode::OK, [("content-type", "application/json")], bytes).into_response()
        }
        Err(err) => {
            log::debug!("handle_parse: encode failed: {err}");
            ApiError::EncodeFailed.into_response()
        }
    }
}

async fn handle_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

/// Builds the service's route table: `GET /health`, `POST /parse`, and a catch-all 404. A
/// request to a known path with the wrong method (e.g. `POST /health`) also falls through to
/// the 404 body rather than axum's default empty 405, since any unmatched method/path
/// combination is treated the same way.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(handle_health).fallback(handle_not_found))
        .route("/parse", post(handle_parse).fallback(handle_not_found))
        .fallback(handle_not_found)
}
