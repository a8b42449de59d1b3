use crate::domain::ports::ReceiptStoreHandle;
use crate::domain::receipt::Receipt;
use crate::error::{ProofError, Result};
use crate::infrastructure::crypto::token;
use chrono::Utc;

/// Binds a proof and a transfer signature into a stored receipt.
///
/// Neither argument is checked against the proof store or the ledger.
pub struct ReceiptIssuer {
    receipts: ReceiptStoreHandle,
}

impl ReceiptIssuer {
    pub fn new(receipts: ReceiptStoreHandle) -> Self {
        Self { receipts }
    }

    pub async fn issue(&self, proof: &str, signature: &str) -> Result<Receipt> {
        if proof.is_empty() || signature.is_empty() {
            return Err(ProofError::validation("proof and signature are required"));
        }

        let receipt = Receipt {
            id: token("zkr_", 10),
            proof: proof.to_string(),
            signature: signature.to_string(),
            issued_at: Utc::now(),
        };
        self.receipts.insert(receipt.clone()).await?;
        tracing::info!(id = %receipt.id, "receipt issued");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_issue_binds_proof_and_signature() {
        let store: ReceiptStoreHandle = Arc::new(InMemoryReceiptStore::new());
        let issuer = ReceiptIssuer::new(store.clone());

        let receipt = issuer.issue("abc123", "sig_ff").await.unwrap();
        assert!(receipt.id.starts_with("zkr_"));
        assert_eq!(receipt.id.len(), 4 + 20);

        let stored = store.get(&receipt.id).await.unwrap().unwrap();
        assert_eq!(stored.proof, "abc123");
        assert_eq!(stored.signature, "sig_ff");
    }

    #[tokio::test]
    async fn test_missing_arguments_create_nothing() {
        let store: ReceiptStoreHandle = Arc::new(InMemoryReceiptStore::new());
        let issuer = ReceiptIssuer::new(store.clone());

        for (proof, signature) in [("", "sig_1"), ("abc", ""), ("", "")] {
            let err = issuer.issue(proof, signature).await.unwrap_err();
            assert!(matches!(err, ProofError::Validation(_)));
        }
        assert_eq!(store.len().await.unwrap(), 0);
    }
}
