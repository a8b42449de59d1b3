//! Keyed hashing and random token generation.

use crate::error::{ProofError, Result};
use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 over the JSON form of a value, keyed by the prover secret.
#[derive(Clone)]
pub struct KeyedHasher {
    secret: Vec<u8>,
}

impl KeyedHasher {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Lowercase hex tag over the canonical JSON serialization of `payload`.
    pub fn tag<T: Serialize>(&self, payload: &T) -> Result<String> {
        let data = serde_json::to_vec(payload)?;
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| ProofError::Internal(e.to_string()))?;
        mac.update(&data);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for KeyedHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedHasher").finish_non_exhaustive()
    }
}

/// `len` random bytes, hex encoded.
pub fn random_hex(len: usize) -> String {
    let mut buf = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(buf)
}

/// `prefix` followed by `len` random bytes in hex, e.g. `sig_` + 16 bytes.
pub fn token(prefix: &str, len: usize) -> String {
    format!("{prefix}{}", random_hex(len))
}
