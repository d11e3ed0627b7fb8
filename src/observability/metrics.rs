//! Metrics collection and exposition.
//!
//! # Metrics
//! - `analyze_requests_total` (counter): settled invocations by outcome
//! - `analyze_request_duration_seconds` (histogram): invocation latency
//! - `analyze_superseded_total` (counter): invocations overtaken by a newer one

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Start the Prometheus exporter on `addr`. Requires a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a settled invocation. `outcome` is "success" or an error kind.
pub fn record_request(outcome: &'static str, elapsed: Duration) {
    counter!("analyze_requests_total", "outcome" => outcome).increment(1);
    histogram!("analyze_request_duration_seconds", "outcome" => outcome)
        .record(elapsed.as_secs_f64());
}

pub fn record_superseded() {
    counter!("analyze_superseded_total").increment(1);
}
