use super::AppState;
use super::extract::JsonBody;
use crate::application::engine::SERVICE_NAME;
use crate::domain::commitment::CommitmentMetadata;
use crate::domain::transfer::{TransferRecord, TransferStatus};
use crate::error::{ProofError, Result};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub ok: bool,
    pub service: &'static str,
    pub docs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub name: &'static str,
    pub time: DateTime<Utc>,
    /// Seconds since startup.
    pub uptime: f64,
    pub commit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveResponse {
    pub ok: bool,
    pub proof: String,
    pub ts: i64,
    pub time_ms: u128,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub ok: bool,
    pub valid: bool,
    pub meta: Option<CommitmentMetadata>,
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub ok: bool,
    pub signature: String,
    pub id: String,
    pub status: TransferStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub ok: bool,
    pub receipt: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub ok: bool,
    pub items: Vec<TransferRecord>,
}

/// Mirrors the loose truthiness check callers rely on: `0`, `""` and
/// `false` all count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Accepts JSON numbers and numeric strings of any magnitude.
fn parse_amount(value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ProofError::validation("amount must be a positive number"))
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        ok: true,
        service: SERVICE_NAME,
        docs: "/api/health",
    })
}

pub async fn health(State(engine): State<AppState>) -> Json<HealthResponse> {
    let health = engine.health();
    Json(HealthResponse {
        ok: true,
        name: health.name,
        time: health.time,
        uptime: health.uptime.as_secs_f64(),
        commit: health.commit,
    })
}

pub async fn prove(
    State(engine): State<AppState>,
    body: JsonBody,
) -> Result<Json<ProveResponse>> {
    let (amount, to) = match (body.field("amount"), body.text("to")?) {
        (Some(amount), Some(to)) if !is_blank(amount) && !to.is_empty() => (amount, to),
        _ => return Err(ProofError::validation("amount and to are required")),
    };
    let amount = parse_amount(amount)?;
    let memo = body.text("memo")?.unwrap_or_default();

    let issued = engine.issue_commitment(amount, to, memo).await?;

    Ok(Json(ProveResponse {
        ok: true,
        proof: issued.proof,
        ts: issued.issued_at,
        time_ms: issued.elapsed.as_millis(),
    }))
}

pub async fn verify(
    State(engine): State<AppState>,
    body: JsonBody,
) -> Result<Json<VerifyResponse>> {
    let verification = engine
        .verify_commitment(body.text("proof")?.unwrap_or_default())
        .await?;

    Ok(Json(VerifyResponse {
        ok: true,
        valid: verification.valid,
        meta: verification.meta,
    }))
}

pub async fn transfer(
    State(engine): State<AppState>,
    body: JsonBody,
) -> Result<Json<TransferResponse>> {
    let record = engine
        .execute_transfer(body.text("proof")?.unwrap_or_default())
        .await?;

    Ok(Json(TransferResponse {
        ok: true,
        signature: record.signature,
        id: record.id,
        status: record.status,
    }))
}

pub async fn receipt(
    State(engine): State<AppState>,
    body: JsonBody,
) -> Result<Json<ReceiptResponse>> {
    let receipt = engine
        .issue_receipt(
            body.text("proof")?.unwrap_or_default(),
            body.text("signature")?.unwrap_or_default(),
        )
        .await?;

    Ok(Json(ReceiptResponse {
        ok: true,
        receipt: receipt.id,
        issued_at: receipt.issued_at,
    }))
}

pub async fn activity(State(engine): State<AppState>) -> Result<Json<ActivityResponse>> {
    let items = engine.list_activity().await?;
    Ok(Json(ActivityResponse { ok: true, items }))
}

pub async fn not_found() -> Response {
    super::error::failure(StatusCode::NOT_FOUND, "Route not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_amount_forms() {
        assert_eq!(parse_amount(&json!(10)).unwrap(), 10.0);
        assert_eq!(parse_amount(&json!(2.5)).unwrap(), 2.5);
        assert_eq!(parse_amount(&json!("7.25")).unwrap(), 7.25);
        assert_eq!(parse_amount(&json!(" 1e2 ")).unwrap(), 100.0);
        assert!(parse_amount(&json!("ten")).is_err());
        assert!(parse_amount(&json!([1])).is_err());
    }

    #[test]
    fn test_parse_amount_keeps_extreme_magnitudes() {
        assert_eq!(parse_amount(&json!(1e-30)).unwrap(), 1e-30);
        assert_eq!(parse_amount(&json!(1e30)).unwrap(), 1e30);
        assert_eq!(
            parse_amount(&json!("0.00000000000000000000000000001")).unwrap(),
            1e-29
        );
    }

    #[test]
    fn test_blank_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!(0)));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!(false)));
        assert!(!is_blank(&json!(-1)));
        assert!(!is_blank(&json!("abc")));
    }
}
