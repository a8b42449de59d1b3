use super::commitment::{Commitment, CommitmentMetadata};
use super::receipt::Receipt;
use super::transfer::TransferRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ProofStore: Send + Sync {
    async fn insert(&self, commitment: Commitment) -> Result<()>;
    async fn get(&self, proof: &str) -> Result<Option<CommitmentMetadata>>;
    async fn len(&self) -> Result<usize>;
}

#[async_trait]
pub trait TransactionLedger: Send + Sync {
    /// Inserts the record as the newest entry.
    async fn prepend(&self, record: TransferRecord) -> Result<()>;
    /// Up to `limit` records, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<TransferRecord>>;
    async fn get(&self, id: &str) -> Result<Option<TransferRecord>>;
    /// Flips `submitted` to `confirmed` in place. `false` if the id is unknown
    /// or already confirmed.
    async fn confirm(&self, id: &str) -> Result<bool>;
    async fn len(&self) -> Result<usize>;
}

#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn insert(&self, receipt: Receipt) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<Receipt>>;
    async fn len(&self) -> Result<usize>;
}

pub type ProofStoreHandle = Arc<dyn ProofStore>;
pub type LedgerHandle = Arc<dyn TransactionLedger>;
pub type ReceiptStoreHandle = Arc<dyn ReceiptStore>;
