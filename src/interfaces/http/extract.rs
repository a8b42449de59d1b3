use super::error::failure;
use crate::error::{ProofError, Result};
use axum::Json;
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

/// A JSON request body read field by field.
///
/// A missing or unparsable body reads as `{}` so the operation reports the
/// missing field. Only an oversized body is rejected outright (413).
#[derive(Debug, Clone, Default)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => Err(
                failure(StatusCode::PAYLOAD_TOO_LARGE, "request entity too large"),
            ),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl JsonBody {
    /// Raw field; absent for `null` and for non-object bodies.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    /// A string field. Present but non-string values are a validation error.
    pub fn text(&self, name: &str) -> Result<Option<&str>> {
        match self.field(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ProofError::validation(format!("{name} must be a string"))),
        }
    }
}
