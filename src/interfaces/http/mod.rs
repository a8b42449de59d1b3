//! # HTTP API
//!
//! Builds the axum router in front of [`ProofEngine`]. Every response body
//! carries an `ok` flag; failures add an `error` message.
//!
//! | Method | Path            | Description                               |
//! |--------|-----------------|-------------------------------------------|
//! | GET    | `/`             | Service banner                            |
//! | GET    | `/api/health`   | Liveness probe                            |
//! | POST   | `/api/prove`    | Issue a commitment                        |
//! | POST   | `/api/verify`   | Check whether a proof is known            |
//! | POST   | `/api/transfer` | Execute a simulated transfer              |
//! | POST   | `/api/receipt`  | Bind a proof and signature into a receipt |
//! | GET    | `/api/activity` | Recent transfers, newest first            |

pub mod error;
pub mod extract;
pub mod handlers;
pub mod limiter;

use crate::application::engine::ProofEngine;
use crate::config::ServiceConfig;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header, request};
use axum::routing::{get, post};
use axum::{Router, middleware};
use limiter::RateLimiter;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub type AppState = Arc<ProofEngine>;

pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Requests without an `Origin` header never reach the predicate. A
/// disallowed origin still gets its response, only without CORS headers.
fn cors_layer(origins: Vec<String>) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::predicate(move |origin: &HeaderValue, _: &request::Parts| {
            origin
                .to_str()
                .is_ok_and(|o| origins.iter().any(|prefix| o.starts_with(prefix.as_str())))
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn create_router(engine: AppState, config: &ServiceConfig) -> Router {
    let rate_limiter = Arc::new(RateLimiter::per_minute(config.rate_limit));

    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/prove", post(handlers::prove))
        .route("/verify", post(handlers::verify))
        .route("/transfer", post(handlers::transfer))
        .route("/receipt", post(handlers::receipt))
        .route("/activity", get(handlers::activity));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(rate_limiter, limiter::rate_limit))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer(config.allowed_origins()))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}
