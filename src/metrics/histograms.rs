//! Histogram metrics

use super::labels;

/// Duration of a driver connect call
pub fn connect_duration(family: &'static str, duration_ms: u64) {
    metrics::histogram!(labels::CONNECT_DURATION_MS, labels::FAMILY => family)
        .record(duration_ms as f64);
}

/// Duration of a health ping
pub fn ping_duration(family: &'static str, duration_ms: u64) {
    metrics::histogram!(labels::PING_DURATION_MS, labels::FAMILY => family)
        .record(duration_ms as f64);
}
