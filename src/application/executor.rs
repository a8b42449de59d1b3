use crate::domain::commitment::CommitmentMetadata;
use crate::domain::ports::{LedgerHandle, ProofStoreHandle};
use crate::domain::transfer::{TransferRecord, TransferStatus, UNKNOWN_ASSET};
use crate::error::{ProofError, Result};
use crate::infrastructure::crypto::token;
use crate::infrastructure::scheduler::ConfirmationScheduler;
use chrono::Utc;

/// Verifies commitments and executes simulated transfers against them.
///
/// A successful `execute` reads the proof store, prepends a `submitted` record
/// to the ledger and hands the record id to the [`ConfirmationScheduler`]. It
/// never waits for confirmation.
pub struct TransferExecutor {
    proofs: ProofStoreHandle,
    ledger: LedgerHandle,
    scheduler: ConfirmationScheduler,
}

impl TransferExecutor {
    pub fn new(proofs: ProofStoreHandle, ledger: LedgerHandle, scheduler: ConfirmationScheduler) -> Self {
        Self {
            proofs,
            ledger,
            scheduler,
        }
    }

    /// True iff `proof` was issued by this process.
    ///
    /// Presence only: the stored metadata is not re-hashed.
    pub async fn verify(&self, proof: &str) -> Result<bool> {
        Ok(self.lookup(proof).await?.is_some())
    }

    /// The metadata a proof commits to, if it is known.
    pub async fn lookup(&self, proof: &str) -> Result<Option<CommitmentMetadata>> {
        if proof.is_empty() {
            return Err(ProofError::validation("proof is required"));
        }
        self.proofs.get(proof).await
    }

    pub async fn execute(&self, proof: &str) -> Result<TransferRecord> {
        let metadata = self
            .lookup(proof)
            .await?
            .ok_or(ProofError::UnknownCommitment)?;

        let record = TransferRecord {
            id: token("tx_", 6),
            signature: token("sig_", 16),
            proof: proof.to_string(),
            recipient: metadata.recipient,
            amount: metadata.amount,
            asset: UNKNOWN_ASSET.to_string(),
            status: TransferStatus::Submitted,
            created_at: Utc::now().timestamp_millis(),
        };

        self.ledger.prepend(record.clone()).await?;
        self.scheduler.schedule(&record.id);
        tracing::info!(id = %record.id, proof, "transfer submitted");

        Ok(record)
    }

    pub fn scheduler(&self) -> &ConfirmationScheduler {
        &self.scheduler
    }
}
