use clap::Parser;
use proofpay::application::engine::ProofEngine;
use proofpay::config::ServiceConfig;

pub const CONFIRMATION_DELAY_MS: u64 = 1000;

pub fn config() -> ServiceConfig {
    ServiceConfig::parse_from([
        "proofpay".to_string(),
        "--prove-latency-ms".to_string(),
        "0".to_string(),
        "--confirmation-delay-ms".to_string(),
        CONFIRMATION_DELAY_MS.to_string(),
    ])
}

#[allow(dead_code)]
pub fn engine() -> ProofEngine {
    ProofEngine::in_memory(&config())
}
