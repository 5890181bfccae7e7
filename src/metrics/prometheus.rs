//! Prometheus metrics definitions

use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

use crate::error::{Error, Result};

lazy_static::lazy_static! {
    /// Total number of lifecycle operations
    pub static ref RECONCILIATIONS: CounterVec = register_counter_vec!(
        "spoc_provider_reconciliations_total",
        "Total number of lifecycle operations",
        &["operation"]
    ).unwrap();

    /// Total number of failed lifecycle operations
    pub static ref RECONCILIATION_ERRORS: CounterVec = register_counter_vec!(
        "spoc_provider_reconciliation_errors_total",
        "Total number of failed lifecycle operations",
        &["operation", "kind"]
    ).unwrap();

    /// Lifecycle operation duration histogram
    pub static ref RECONCILE_DURATION: HistogramVec = register_histogram_vec!(
        "spoc_provider_reconcile_duration_seconds",
        "Duration of lifecycle operations in seconds",
        &["operation"],
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    ).unwrap();

    /// Total number of calls issued to the Operations Center
    pub static ref REMOTE_CALLS: CounterVec = register_counter_vec!(
        "spoc_provider_remote_calls_total",
        "Total number of Operations Center calls by call and outcome",
        &["call", "outcome"]
    ).unwrap();
}

/// Count a remote call and pass its result through untouched
pub fn observe_remote<T, E>(call: &str, result: std::result::Result<T, E>) -> std::result::Result<T, E> {
    let outcome = if result.is_ok() { "success" } else { "failure" };
    REMOTE_CALLS.with_label_values(&[call, outcome]).inc();
    result
}

/// Render all registered metrics in the Prometheus text format
pub fn render() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| Error::Metrics(format!("Failed to encode metrics: {}", e)))?;

    String::from_utf8(buffer).map_err(|e| Error::Metrics(format!("Metrics are not UTF-8: {}", e)))
}
