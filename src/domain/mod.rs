//! Plain data types and the storage ports the application layer depends on.

pub mod commitment;
pub mod ports;
pub mod receipt;
pub mod transfer;
