use crate::error::{ProofError, Result};
use serde::Serialize;

/// A strictly positive, finite transfer amount.
///
/// Any finite `f64` above zero is accepted, however small or large, so the
/// commitment store never holds a zero, negative or non-finite amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ProofError::validation("amount must be a positive number"))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// The transfer intent a proof commits to.
///
/// Field order and names are the canonical form fed to the keyed hash, so
/// they must not change without invalidating every outstanding proof.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitmentMetadata {
    pub amount: Amount,
    #[serde(rename = "to")]
    pub recipient: String,
    pub memo: String,
    /// Issuance time in Unix milliseconds.
    #[serde(rename = "ts")]
    pub issued_at: i64,
    pub nonce: String,
}

/// A proof together with the metadata it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commitment {
    pub proof: String,
    #[serde(flatten)]
    pub metadata: CommitmentMetadata,
}

impl Commitment {
    pub fn issued_at(&self) -> i64 {
        self.metadata.issued_at
    }
}
