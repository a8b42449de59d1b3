use chrono::{DateTime, Utc};
use serde::Serialize;

/// Binds a commitment to the signature of the transfer made against it.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub proof: String,
    pub signature: String,
    pub issued_at: DateTime<Utc>,
}
