use clap::Parser;
use miette::{IntoDiagnostic, Result};
use proofpay::application::engine::ProofEngine;
use proofpay::config::ServiceConfig;
use proofpay::interfaces::http::create_router;
use proofpay::logging::{DEFAULT_FILTER, init_logging};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = ServiceConfig::parse();
    init_logging(DEFAULT_FILTER, config.log_format);

    // Stores live for the life of the process; nothing is persisted.
    let engine = Arc::new(ProofEngine::in_memory(&config));
    let router = create_router(engine, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.into_diagnostic()?;
    tracing::info!(%addr, "proofpay listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .into_diagnostic()?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, draining connections");
}
