use super::error::failure;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Expired windows are swept once the table grows past this many clients.
const SWEEP_THRESHOLD: usize = 10_000;

struct Window {
    started: Instant,
    hits: u32,
}

/// Fixed-window request counter keyed by client IP.
pub struct RateLimiter {
    max: u32,
    window: Duration,
    clients: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    /// `max` of zero disables limiting.
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn per_minute(max: u32) -> Self {
        Self::new(max, Duration::from_secs(60))
    }

    /// Counts a request from `ip` and reports whether it is admitted.
    pub fn check(&self, ip: IpAddr) -> bool {
        if self.max == 0 {
            return true;
        }

        let now = Instant::now();
        let mut clients = self.clients.lock();
        if clients.len() > SWEEP_THRESHOLD {
            clients.retain(|_, w| now.duration_since(w.started) < self.window);
        }

        let window = clients.entry(ip).or_insert(Window {
            started: now,
            hits: 0,
        });
        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.hits = 0;
        }
        window.hits = window.hits.saturating_add(1);
        window.hits <= self.max
    }
}

/// The `X-Forwarded-For` entry appended by the single trusted proxy (the
/// last one), else the socket peer. Earlier entries are client-supplied.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> IpAddr {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.rsplit(',').next())
        .and_then(|v| v.trim().parse().ok())
        .or(peer.map(|p| p.ip()))
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(request.headers(), peer.map(|ConnectInfo(addr)| addr));
    if !limiter.check(ip) {
        tracing::warn!(%ip, "rate limit exceeded");
        return failure(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many requests, please slow down.",
        );
    }
    next.run(request).await
}
