//! Counter metrics

use super::labels;

/// Driver connect call issued
pub fn connect_attempted(family: &'static str) {
    metrics::counter!(labels::CONNECT_ATTEMPTS, labels::FAMILY => family).increment(1);
}

/// Driver connect call failed
pub fn connect_failed(family: &'static str) {
    metrics::counter!(labels::CONNECT_FAILURES, labels::FAMILY => family).increment(1);
}

/// Caller received the failure of a connect attempt it waited on
pub fn connect_failure_shared(family: &'static str) {
    metrics::counter!(labels::CONNECT_SHARED_FAILURES, labels::FAMILY => family).increment(1);
}

/// Health ping failed
pub fn ping_failed(family: &'static str) {
    metrics::counter!(labels::PING_FAILURES, labels::FAMILY => family).increment(1);
}

/// A held client was swapped for a new one
pub fn client_replaced(family: &'static str) {
    metrics::counter!(labels::CLIENTS_REPLACED, labels::FAMILY => family).increment(1);
}

/// Best-effort disconnect failed or timed out and was ignored
pub fn disconnect_failure_ignored(family: &'static str, phase: &'static str) {
    metrics::counter!(
        labels::DISCONNECT_FAILURES_IGNORED,
        labels::FAMILY => family,
        labels::PHASE => phase
    )
    .increment(1);
}

/// Handle closed a live client
pub fn closed(family: &'static str) {
    metrics::counter!(labels::CLOSES, labels::FAMILY => family).increment(1);
}

/// Close gave up waiting for disconnect
pub fn close_timed_out(family: &'static str) {
    metrics::counter!(labels::CLOSE_TIMEOUTS, labels::FAMILY => family).increment(1);
}
