//! Application layer: the commitment/transfer state machine.
//!
//! `ProofEngine` is the entry point. It composes the `CommitmentGenerator`,
//! `TransferExecutor` and `ReceiptIssuer`, each of which works against the
//! storage ports from `domain::ports`.

pub mod engine;
pub mod executor;
pub mod generator;
pub mod receipts;
