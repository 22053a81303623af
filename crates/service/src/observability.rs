use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static MUTATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "portfolio_store_mutations_total",
        "Total snapshot mutations applied by the content store"
    )
    .expect("register mutations_total")
});

pub static PERSIST_WRITES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "portfolio_store_persist_writes_total",
        "Total snapshots written to the persistence backend"
    )
    .expect("register persist_writes_total")
});

pub static PERSIST_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "portfolio_store_persist_failures_total",
        "Total snapshot writes that failed; in-memory state was kept"
    )
    .expect("register persist_failures_total")
});

pub static LOAD_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "portfolio_store_load_failures_total",
        "Total loads that fell back to defaults after a read or parse failure"
    )
    .expect("register load_failures_total")
});

/// Render every registered metric in the Prometheus text format.
pub fn encode_metrics() -> Result<String, String> {
    // touch counters so they show up before their first increment
    Lazy::force(&MUTATIONS_TOTAL);
    Lazy::force(&PERSIST_WRITES_TOTAL);
    Lazy::force(&PERSIST_FAILURES_TOTAL);
    Lazy::force(&LOAD_FAILURES_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| format!("metrics encode error: {e}"))?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}
