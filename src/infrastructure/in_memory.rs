use crate::domain::commitment::{Commitment, CommitmentMetadata};
use crate::domain::ports::{ProofStore, ReceiptStore, TransactionLedger};
use crate::domain::receipt::Receipt;
use crate::domain::transfer::TransferRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store mapping proofs to the metadata they commit to.
///
/// Uses `Arc<RwLock<HashMap<String, CommitmentMetadata>>>` so that concurrent
/// `generate` and `verify` callers can share it. Nothing survives a restart.
#[derive(Default, Clone)]
pub struct InMemoryProofStore {
    proofs: Arc<RwLock<HashMap<String, CommitmentMetadata>>>,
}

impl InMemoryProofStore {
    /// Creates a new, empty proof store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProofStore for InMemoryProofStore {
    async fn insert(&self, commitment: Commitment) -> Result<()> {
        let mut proofs = self.proofs.write().await;
        proofs.insert(commitment.proof, commitment.metadata);
        Ok(())
    }

    async fn get(&self, proof: &str) -> Result<Option<CommitmentMetadata>> {
        let proofs = self.proofs.read().await;
        Ok(proofs.get(proof).cloned())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.proofs.read().await.len())
    }
}

/// A thread-safe in-memory transfer ledger, newest record at the front.
///
/// Status flips happen in place, so readers always see the live record.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    records: Arc<RwLock<VecDeque<TransferRecord>>>,
}

impl InMemoryLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionLedger for InMemoryLedger {
    async fn prepend(&self, record: TransferRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push_front(record);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<TransferRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().take(limit).cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<TransferRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn confirm(&self, id: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        Ok(records
            .iter_mut()
            .find(|r| r.id == id)
            .is_some_and(TransferRecord::confirm))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}

/// A thread-safe in-memory receipt store keyed by receipt id.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Receipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, receipt: Receipt) -> Result<()> {
        let mut receipts = self.receipts.write().await;
        receipts.insert(receipt.id.clone(), receipt);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.receipts.read().await.len())
    }
}
