//! Prometheus metrics for job search and diagnostics.
//!
//! This module provides metrics for:
//! - Job listing requests and degraded (fail-open) responses
//! - Records returned to clients
//! - Store query latency
//! - Diagnostics requests

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Job listing requests counter metric name.
pub const METRIC_JOBS_REQUESTS: &str = "jobs_requests_total";
/// Degraded job listing responses counter metric name.
pub const METRIC_JOBS_DEGRADED: &str = "jobs_degraded_total";
/// Job records returned counter metric name.
pub const METRIC_JOBS_RETURNED: &str = "jobs_returned_total";
/// Store query latency metric name.
pub const METRIC_STORE_QUERY_LATENCY: &str = "store_query_latency_ms";
/// Diagnostics requests counter metric name.
pub const METRIC_DIAGNOSTICS_REQUESTS: &str = "diagnostics_requests_total";

/// Install the Prometheus recorder and describe all metrics.
/// Call this once at startup.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_histogram!(
        METRIC_STORE_QUERY_LATENCY,
        "Job store query latency in milliseconds"
    );

    describe_counter!(METRIC_JOBS_REQUESTS, "Total number of job listing requests");
    describe_counter!(
        METRIC_JOBS_DEGRADED,
        "Job listing requests answered with an empty list, by reason"
    );
    describe_counter!(METRIC_JOBS_RETURNED, "Total number of job records returned");
    describe_counter!(
        METRIC_DIAGNOSTICS_REQUESTS,
        "Total number of diagnostics requests"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Increment job listing requests counter.
pub fn inc_jobs_requests() {
    counter!(METRIC_JOBS_REQUESTS).increment(1);
}

/// Increment degraded responses counter.
pub fn inc_jobs_degraded(reason: &'static str) {
    counter!(METRIC_JOBS_DEGRADED, "reason" => reason).increment(1);
}

/// Add to the returned records counter.
pub fn add_jobs_returned(count: usize) {
    counter!(METRIC_JOBS_RETURNED).increment(count as u64);
}

/// Increment diagnostics requests counter.
pub fn inc_diagnostics_requests() {
    counter!(METRIC_DIAGNOSTICS_REQUESTS).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_ms());
    }
}

/// Create a latency timer for store queries.
pub fn timer_store_query() -> LatencyTimer {
    LatencyTimer::new(METRIC_STORE_QUERY_LATENCY)
}
