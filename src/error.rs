use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// Malformed or missing caller input. No store is touched.
    #[error("{0}")]
    Validation(String),
    #[error("unknown proof")]
    UnknownCommitment,
    /// Anything else. The message is logged, never returned to callers.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProofError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_json::Error> for ProofError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProofError>;
