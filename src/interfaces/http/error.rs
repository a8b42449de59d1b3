use crate::error::ProofError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// `{ ok: false, error }` with the given status.
pub fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "ok": false, "error": message }))).into_response()
}

impl IntoResponse for ProofError {
    fn into_response(self) -> Response {
        match self {
            ProofError::Validation(msg) => failure(StatusCode::BAD_REQUEST, &msg),
            ProofError::UnknownCommitment => failure(StatusCode::BAD_REQUEST, "unknown proof"),
            ProofError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                failure(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        }
    }
}
