use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Request spans from tower-http plus the store's load and persist events.
/// Per-write persistence lines are `debug` under `service::content`.
const DEFAULT_FILTER: &str = "info,service=info,server=info,tower_http=info,axum=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Human-readable stdout logs for local runs.
///
/// Startup reports the chosen backend and bind address, the content store
/// reports seeding or fallback on load, and failed snapshot writes surface
/// as `warn` with the storage key.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event, keeping structured fields such as `key`,
/// `bytes` and `error` queryable. Set `RUST_LOG=info,service::content=debug`
/// to also see every persisted snapshot.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
