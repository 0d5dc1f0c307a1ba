//! Structured logging.
//!
//! The subscriber decides formatting and level filtering; the pipeline only
//! hands over one summary entry per handled connection via [`record`].

use tracing_subscriber::EnvFilter;

/// Installs the global JSON subscriber. Level selection comes from
/// `RUST_LOG`, defaulting to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Per-connection summary, emitted exactly once when handling finishes.
#[derive(Debug, serde::Serialize)]
pub struct RequestLog<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub user_agent: &'a str,
    /// Headers other than User-Agent, in encounter order.
    pub other_headers: &'a [(String, String)],
    /// Wall-clock seconds from read start through close, delay included.
    pub exec_time_seconds: f64,
}

pub fn record(entry: &RequestLog<'_>) {
    let other_headers =
        serde_json::to_string(entry.other_headers).unwrap_or_else(|_| "[]".to_string());

    tracing::info!(
        subsystem = "http",
        method = entry.method,
        path = entry.path,
        user_agent = entry.user_agent,
        other_headers = %other_headers,
        exec_time_seconds = entry.exec_time_seconds,
        "request handled"
    );
}
