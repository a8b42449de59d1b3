use crate::domain::commitment::{Amount, Commitment, CommitmentMetadata};
use crate::domain::ports::ProofStoreHandle;
use crate::error::{ProofError, Result};
use crate::infrastructure::crypto::{KeyedHasher, random_hex};
use chrono::Utc;

/// Nonce length in bytes before hex encoding.
pub const NONCE_BYTES: usize = 4;

/// Derives commitments from transfer intents and records them in the proof store.
pub struct CommitmentGenerator {
    hasher: KeyedHasher,
    proofs: ProofStoreHandle,
}

impl CommitmentGenerator {
    pub fn new(hasher: KeyedHasher, proofs: ProofStoreHandle) -> Self {
        Self { hasher, proofs }
    }

    /// Issues a new commitment for `amount` to `recipient`.
    ///
    /// The proof is the keyed hash of the metadata, which includes a fresh
    /// nonce and the issuance time, so identical intents never share a proof.
    /// Nothing is stored when validation fails.
    pub async fn generate(&self, amount: f64, recipient: &str, memo: &str) -> Result<Commitment> {
        let amount = Amount::new(amount)?;
        if recipient.trim().is_empty() {
            return Err(ProofError::validation("recipient is required"));
        }

        let metadata = CommitmentMetadata {
            amount,
            recipient: recipient.to_string(),
            memo: memo.to_string(),
            issued_at: Utc::now().timestamp_millis(),
            nonce: random_hex(NONCE_BYTES),
        };
        let proof = self.hasher.tag(&metadata)?;
        let commitment = Commitment { proof, metadata };

        self.proofs.insert(commitment.clone()).await?;
        tracing::info!(
            proof = %commitment.proof,
            recipient = %commitment.metadata.recipient,
            "commitment issued"
        );
        Ok(commitment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryProofStore;
    use std::sync::Arc;

    fn generator() -> (CommitmentGenerator, ProofStoreHandle) {
        let proofs: ProofStoreHandle = Arc::new(InMemoryProofStore::new());
        let generator = CommitmentGenerator::new(KeyedHasher::new("test-secret"), proofs.clone());
        (generator, proofs)
    }

    #[tokio::test]
    async fn test_generate_stores_metadata_under_proof() {
        let (generator, proofs) = generator();

        let commitment = generator.generate(10.0, "alice", "lunch").await.unwrap();
        assert_eq!(commitment.proof.len(), 64);
        assert_eq!(commitment.metadata.nonce.len(), NONCE_BYTES * 2);

        let stored = proofs.get(&commitment.proof).await.unwrap().unwrap();
        assert_eq!(stored, commitment.metadata);
        assert_eq!(stored.amount.value(), 10.0);
        assert_eq!(stored.memo, "lunch");
    }

    #[tokio::test]
    async fn test_proof_is_keyed_hash_of_metadata() {
        let (generator, _) = generator();
        let commitment = generator.generate(3.25, "bob", "").await.unwrap();

        let recomputed = KeyedHasher::new("test-secret").tag(&commitment.metadata).unwrap();
        assert_eq!(recomputed, commitment.proof);

        let other_key = KeyedHasher::new("other").tag(&commitment.metadata).unwrap();
        assert_ne!(other_key, commitment.proof);
    }

    #[tokio::test]
    async fn test_identical_intents_get_distinct_proofs() {
        let (generator, proofs) = generator();

        let a = generator.generate(1.0, "carol", "same").await.unwrap();
        let b = generator.generate(1.0, "carol", "same").await.unwrap();
        assert_ne!(a.proof, b.proof);
        assert_eq!(proofs.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_any_finite_positive_amount_is_accepted() {
        let (generator, proofs) = generator();

        for amount in [1e-30, 1e30, f64::MAX] {
            let commitment = generator.generate(amount, "erin", "").await.unwrap();
            let stored = proofs.get(&commitment.proof).await.unwrap().unwrap();
            assert_eq!(stored.amount.value(), amount);
        }
    }

    #[tokio::test]
    async fn test_invalid_input_leaves_store_untouched() {
        let (generator, proofs) = generator();

        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = generator.generate(amount, "alice", "").await.unwrap_err();
            assert!(matches!(err, ProofError::Validation(_)));
        }
        for recipient in ["", "   "] {
            let err = generator.generate(5.0, recipient, "").await.unwrap_err();
            assert!(matches!(err, ProofError::Validation(_)));
        }

        assert_eq!(proofs.len().await.unwrap(), 0);
    }
}
