//! Metrics collection and exposition.
//!
//! # Metrics
//! - `grumblr_page_requests_total` (counter): page requests by route, status

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(err) => tracing::error!(error = %err, "failed to install metrics exporter"),
    }
}

/// Record one handled page request.
pub fn record_page(route: &'static str, status: u16) {
    ::metrics::counter!(
        "grumblr_page_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
}
