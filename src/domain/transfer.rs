use super::commitment::Amount;
use serde::Serialize;

/// Asset tag carried by simulated transfers.
pub const UNKNOWN_ASSET: &str = "UNKNOWN";

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    #[default]
    Submitted,
    Confirmed,
}

/// A ledger entry for one simulated transfer.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TransferRecord {
    pub id: String,
    pub signature: String,
    /// The commitment this transfer was executed against.
    pub proof: String,
    #[serde(rename = "to")]
    pub recipient: String,
    pub amount: Amount,
    pub asset: String,
    pub status: TransferStatus,
    /// Creation time in Unix milliseconds.
    #[serde(rename = "ts")]
    pub created_at: i64,
}

impl TransferRecord {
    /// Moves the record to `Confirmed`.
    ///
    /// Returns `false` if it was already confirmed; the transition is one-way.
    pub fn confirm(&mut self) -> bool {
        match self.status {
            TransferStatus::Submitted => {
                self.status = TransferStatus::Confirmed;
                true
            }
            TransferStatus::Confirmed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TransferRecord {
        TransferRecord {
            id: "tx_000000000001".to_string(),
            signature: "sig_00".to_string(),
            proof: "abc".to_string(),
            recipient: "alice".to_string(),
            amount: Amount::new(10.0).unwrap(),
            asset: UNKNOWN_ASSET.to_string(),
            status: TransferStatus::default(),
            created_at: 0,
        }
    }

    #[test]
    fn test_confirm_is_one_way() {
        let mut tx = record();
        assert_eq!(tx.status, TransferStatus::Submitted);
        assert!(tx.confirm());
        assert_eq!(tx.status, TransferStatus::Confirmed);
        assert!(!tx.confirm());
        assert_eq!(tx.status, TransferStatus::Confirmed);
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["status"], "submitted");
        assert_eq!(json["to"], "alice");
        assert_eq!(json["asset"], "UNKNOWN");
        assert_eq!(json["amount"], 10.0);
    }
}
