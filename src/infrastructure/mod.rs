//! Adapters behind the domain ports, plus hashing and timer plumbing.

pub mod crypto;
pub mod in_memory;
pub mod scheduler;
