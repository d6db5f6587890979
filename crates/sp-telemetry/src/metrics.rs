//! Prometheus metrics for the reorder service.
//!
//! All metrics follow the naming convention: `sp_<subsystem>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::Duration;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Reorder calls by object type and outcome code
    pub static ref REORDER_REQUESTS: CounterVec = CounterVec::new(
        Opts::new("sp_reorder_requests_total", "Total reorder requests"),
        &["object_type", "outcome"]
    ).expect("metric creation failed");

    /// Records reported as affected by successful reorders
    pub static ref REORDER_ITEMS_WRITTEN: Counter = Counter::new(
        "sp_reorder_items_written_total",
        "Total records whose order value was written"
    ).expect("metric creation failed");

    /// End-to-end reorder duration
    pub static ref REORDER_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "sp_reorder_duration_seconds",
            "Time spent handling a reorder request"
        ).buckets(exponential_buckets(0.0005, 2.0, 14).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; already registered collectors are kept.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(REORDER_REQUESTS.clone()),
        Box::new(REORDER_ITEMS_WRITTEN.clone()),
        Box::new(REORDER_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record one handled reorder request.
pub fn record_reorder(object_type: &str, outcome: &str, items_written: usize, elapsed: Duration) {
    REORDER_REQUESTS
        .with_label_values(&[object_type, outcome])
        .inc();
    if items_written > 0 {
        REORDER_ITEMS_WRITTEN.inc_by(items_written as f64);
    }
    REORDER_DURATION.observe(elapsed.as_secs_f64());
}
