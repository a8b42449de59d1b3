use crate::domain::ports::LedgerHandle;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Deferred `submitted -> confirmed` transitions, one task per transfer id.
///
/// Each scheduled task sleeps for the configured finality delay and then asks
/// the ledger to confirm the record. Tasks live only in this process; a
/// restart before the delay elapses drops them.
#[derive(Clone)]
pub struct ConfirmationScheduler {
    ledger: LedgerHandle,
    delay: Duration,
    pending: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl ConfirmationScheduler {
    pub fn new(ledger: LedgerHandle, delay: Duration) -> Self {
        Self {
            ledger,
            delay,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Schedules confirmation of `id`.
    ///
    /// Returns `false` without spawning anything if a task for `id` is
    /// already pending. Must be called from within a tokio runtime.
    pub fn schedule(&self, id: &str) -> bool {
        let mut pending = self.pending.lock();
        if pending.contains_key(id) {
            return false;
        }

        let ledger = self.ledger.clone();
        let table = self.pending.clone();
        let delay = self.delay;
        let key = id.to_string();

        // The table lock is held until the handle is inserted, so the task's
        // own removal below always happens after it.
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match ledger.confirm(&key).await {
                Ok(true) => tracing::info!(id = %key, "transfer confirmed"),
                Ok(false) => tracing::debug!(id = %key, "no submitted transfer to confirm"),
                Err(e) => tracing::error!(id = %key, error = %e, "confirmation failed"),
            }
            table.lock().remove(&key);
        });

        pending.insert(id.to_string(), handle);
        true
    }

    /// Aborts the pending confirmation for `id`, leaving the record submitted.
    pub fn cancel(&self, id: &str) -> bool {
        match self.pending.lock().remove(id) {
            Some(handle) => {
                handle.abort();
                tracing::info!(id, "confirmation cancelled");
                true
            }
            None => false,
        }
    }

    /// Number of confirmations that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commitment::Amount;
    use crate::domain::transfer::{TransferRecord, TransferStatus, UNKNOWN_ASSET};
    use crate::infrastructure::in_memory::InMemoryLedger;

    async fn ledger_with(id: &str) -> LedgerHandle {
        let ledger: LedgerHandle = Arc::new(InMemoryLedger::new());
        ledger
            .prepend(TransferRecord {
                id: id.to_string(),
                signature: "sig_test".to_string(),
                proof: "proof".to_string(),
                recipient: "bob".to_string(),
                amount: Amount::new(2.5).unwrap(),
                asset: UNKNOWN_ASSET.to_string(),
                status: TransferStatus::Submitted,
                created_at: 0,
            })
            .await
            .unwrap();
        ledger
    }

    async fn status(ledger: &LedgerHandle, id: &str) -> TransferStatus {
        ledger.get(id).await.unwrap().unwrap().status
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirms_after_delay() {
        let ledger = ledger_with("tx_1").await;
        let scheduler = ConfirmationScheduler::new(ledger.clone(), Duration::from_millis(1000));

        assert!(scheduler.schedule("tx_1"));
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(status(&ledger, "tx_1").await, TransferStatus::Submitted);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(status(&ledger, "tx_1").await, TransferStatus::Confirmed);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_task_per_id() {
        let ledger = ledger_with("tx_1").await;
        let scheduler = ConfirmationScheduler::new(ledger.clone(), Duration::from_millis(500));

        assert!(scheduler.schedule("tx_1"));
        assert!(!scheduler.schedule("tx_1"));
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(status(&ledger, "tx_1").await, TransferStatus::Confirmed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_leaves_record_submitted() {
        let ledger = ledger_with("tx_1").await;
        let scheduler = ConfirmationScheduler::new(ledger.clone(), Duration::from_millis(500));

        scheduler.schedule("tx_1");
        assert!(scheduler.cancel("tx_1"));
        assert!(!scheduler.cancel("tx_1"));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(status(&ledger, "tx_1").await, TransferStatus::Submitted);
        assert_eq!(scheduler.pending(), 0);
    }
}
