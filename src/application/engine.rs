use crate::application::executor::TransferExecutor;
use crate::application::generator::CommitmentGenerator;
use crate::application::receipts::ReceiptIssuer;
use crate::config::ServiceConfig;
use crate::domain::commitment::CommitmentMetadata;
use crate::domain::ports::{LedgerHandle, ProofStoreHandle, ReceiptStoreHandle};
use crate::domain::receipt::Receipt;
use crate::domain::transfer::TransferRecord;
use crate::error::Result;
use crate::infrastructure::crypto::KeyedHasher;
use crate::infrastructure::in_memory::{InMemoryLedger, InMemoryProofStore, InMemoryReceiptStore};
use crate::infrastructure::scheduler::ConfirmationScheduler;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Maximum number of records returned by [`ProofEngine::list_activity`].
pub const ACTIVITY_LIMIT: usize = 50;

pub const SERVICE_NAME: &str = "proofpay";

#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    pub name: &'static str,
    pub time: DateTime<Utc>,
    pub uptime: Duration,
    pub commit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssuedCommitment {
    pub proof: String,
    /// Unix milliseconds.
    pub issued_at: i64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub valid: bool,
    pub meta: Option<CommitmentMetadata>,
}

/// The entry point for every caller-facing operation.
///
/// `ProofEngine` is built once at startup and owns the three stores through
/// their ports. Handlers share it behind an `Arc`; each operation touches at
/// most one store, except `execute_transfer` which reads the proof store
/// before writing the ledger.
pub struct ProofEngine {
    generator: CommitmentGenerator,
    executor: TransferExecutor,
    issuer: ReceiptIssuer,
    ledger: LedgerHandle,
    prove_latency: Duration,
    commit: Option<String>,
    started_at: Instant,
}

impl ProofEngine {
    /// Creates a new `ProofEngine` over the given stores.
    ///
    /// Must be called from within a tokio runtime if transfers will be
    /// executed, since confirmations are spawned onto it.
    pub fn new(
        config: &ServiceConfig,
        proofs: ProofStoreHandle,
        ledger: LedgerHandle,
        receipts: ReceiptStoreHandle,
    ) -> Self {
        let hasher = KeyedHasher::new(&config.prover_secret);
        let scheduler = ConfirmationScheduler::new(ledger.clone(), config.confirmation_delay());

        Self {
            generator: CommitmentGenerator::new(hasher, proofs.clone()),
            executor: TransferExecutor::new(proofs, ledger.clone(), scheduler),
            issuer: ReceiptIssuer::new(receipts),
            ledger,
            prove_latency: config.prove_latency(),
            commit: config.build_commit.clone(),
            started_at: Instant::now(),
        }
    }

    /// Creates an engine backed by fresh in-memory stores.
    pub fn in_memory(config: &ServiceConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryProofStore::new()),
            Arc::new(InMemoryLedger::new()),
            Arc::new(InMemoryReceiptStore::new()),
        )
    }

    pub fn health(&self) -> Health {
        Health {
            name: SERVICE_NAME,
            time: Utc::now(),
            uptime: self.started_at.elapsed(),
            commit: self.commit.clone(),
        }
    }

    /// Issues a commitment, then waits out the simulated proving latency.
    pub async fn issue_commitment(
        &self,
        amount: f64,
        recipient: &str,
        memo: &str,
    ) -> Result<IssuedCommitment> {
        let started = tokio::time::Instant::now();
        let commitment = self.generator.generate(amount, recipient, memo).await?;

        if !self.prove_latency.is_zero() {
            tokio::time::sleep(self.prove_latency).await;
        }

        Ok(IssuedCommitment {
            issued_at: commitment.issued_at(),
            proof: commitment.proof,
            elapsed: started.elapsed(),
        })
    }

    pub async fn verify_commitment(&self, proof: &str) -> Result<Verification> {
        let meta = self.executor.lookup(proof).await?;
        Ok(Verification {
            valid: meta.is_some(),
            meta,
        })
    }

    pub async fn execute_transfer(&self, proof: &str) -> Result<TransferRecord> {
        self.executor.execute(proof).await
    }

    pub async fn issue_receipt(&self, proof: &str, signature: &str) -> Result<Receipt> {
        self.issuer.issue(proof, signature).await
    }

    /// The most recent transfers, newest first.
    pub async fn list_activity(&self) -> Result<Vec<TransferRecord>> {
        self.ledger.recent(ACTIVITY_LIMIT).await
    }

    pub fn executor(&self) -> &TransferExecutor {
        &self.executor
    }
}
