use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output for local development.
    #[default]
    Pretty,
    /// JSON lines for log aggregation.
    Json,
}

/// Proof issuance and simulated transfer service.
#[derive(Parser, Debug, Clone)]
#[command(name = "proofpay", author, version, about, long_about = None)]
pub struct ServiceConfig {
    /// Port the HTTP API listens on.
    #[arg(long, env = "PORT", default_value_t = 10000)]
    pub port: u16,

    /// Secret key for the commitment keyed hash.
    #[arg(long, env = "PROVER_SECRET", default_value = "proofpay-dev-secret", hide_env_values = true)]
    pub prover_secret: String,

    /// Comma-separated origin prefixes allowed by CORS. Empty allows all.
    #[arg(long, env = "CORS_ORIGINS", default_value = "")]
    pub cors_origins: String,

    /// Requests allowed per client IP per minute. Zero disables the limit.
    #[arg(long, env = "RATE_LIMIT_PER_MINUTE", default_value_t = 120)]
    pub rate_limit: u32,

    /// Simulated finality latency before a transfer is confirmed.
    #[arg(long, env = "CONFIRMATION_DELAY_MS", default_value_t = 1000)]
    pub confirmation_delay_ms: u64,

    /// Simulated proving time added to each commitment request.
    #[arg(long, env = "PROVE_LATENCY_MS", default_value_t = 120)]
    pub prove_latency_ms: u64,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Build commit reported by the health endpoint.
    #[arg(long, env = "RENDER_GIT_COMMIT")]
    pub build_commit: Option<String>,
}

impl ServiceConfig {
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }

    pub fn prove_latency(&self) -> Duration {
        Duration::from_millis(self.prove_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServiceConfig::parse_from([
            "proofpay",
            "--port",
            "8080",
            "--cors-origins",
            " https://a.example, ,https://b.example ",
            "--confirmation-delay-ms",
            "250",
            "--log-format",
            "json",
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins(),
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.confirmation_delay(), Duration::from_millis(250));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(ServiceConfig::try_parse_from(["proofpay", "--port", "nope"]).is_err());
    }
}
