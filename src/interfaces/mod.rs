//! Transport adapters around the application layer.

pub mod http;
