//! Error response body shared by all endpoints.
//!
//! Success bodies are endpoint-specific JSON objects. Every error body has the
//! shape `{ "error": "<message>", "code": "<CODE>" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::recommend::RecommendError;

/// Message returned for every 500. Internals stay in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body: `{ "error": "...", "code": "..." }`
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ApiErrorResponse {
    fn build(status: StatusCode, code: &'static str, msg: impl Into<String>) -> Response {
        let body = Self {
            error: msg.into(),
            code,
        };
        (status, axum::Json(body)).into_response()
    }

    pub fn bad_request(msg: impl Into<String>) -> Response {
        Self::build(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Response {
        Self::build(StatusCode::NOT_FOUND, "NOT_FOUND", msg)
    }

    pub fn internal() -> Response {
        Self::build(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            INTERNAL_ERROR_MESSAGE,
        )
    }
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingInput(msg) => {
                warn!(error = %msg, "Rejected recommendation request");
                ApiErrorResponse::bad_request(msg)
            }
            Self::InternalFault(detail) => {
                error!(detail = %detail, "Recommendation request failed");
                ApiErrorResponse::internal()
            }
        }
    }
}
