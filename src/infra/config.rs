//! Centralized configuration (environment variables + defaults).
//!
//! Callers load `.env` with `dotenv::dotenv().ok()` before reading these.

use std::time::Duration;

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Base URL of the authoritative course API (optional).
///
/// When unset the remote source is reported as unconfigured and every cycle falls
/// through to the document store.
pub fn remote_api_base_url() -> Option<String> {
    non_empty_var("REMOTE_API_BASE_URL")
}

/// Request timeout for the remote course API (optional, whole seconds).
pub fn remote_api_timeout() -> anyhow::Result<Option<Duration>> {
    match non_empty_var("REMOTE_API_TIMEOUT_SECS") {
        None => Ok(None),
        Some(v) => {
            let secs = v
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("REMOTE_API_TIMEOUT_SECS must be a valid u64, got {:?}", v))?;
            Ok(Some(Duration::from_secs(secs.max(1))))
        }
    }
}

/// Postgres URL of the secondary document store (optional).
pub fn database_url() -> Option<String> {
    non_empty_var("DATABASE_URL")
}

/// Listen address for the API server.
pub fn bind_addr() -> String {
    non_empty_var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string())
}

/// Whether the API server upserts the bundled catalog into the store at startup.
pub fn seed_store_on_start() -> bool {
    non_empty_var("SEED_STORE_ON_START")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}
