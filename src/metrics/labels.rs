//! Metric names and label values

/// Label key carrying the datastore family
pub const FAMILY: &str = "family";

/// Label key carrying the lifecycle phase of a swallowed disconnect
pub const PHASE: &str = "phase";

/// Stale client discarded by `get_connection`
pub const PHASE_STALE: &str = "stale";
/// Fresh client discarded after a failed verification ping
pub const PHASE_VERIFY: &str = "verify";
/// Healthy client replaced by a verified one
pub const PHASE_REPLACE: &str = "replace";

/// Driver connect calls issued
pub const CONNECT_ATTEMPTS: &str = "datastore_handle_connect_attempts_total";
/// Driver connect calls that failed
pub const CONNECT_FAILURES: &str = "datastore_handle_connect_failures_total";
/// Callers handed the failure of an attempt they waited on
pub const CONNECT_SHARED_FAILURES: &str = "datastore_handle_connect_shared_failures_total";
/// Failed health pings
pub const PING_FAILURES: &str = "datastore_handle_ping_failures_total";
/// Held clients replaced by a verified one
pub const CLIENTS_REPLACED: &str = "datastore_handle_clients_replaced_total";
/// Best-effort disconnects that failed or timed out
pub const DISCONNECT_FAILURES_IGNORED: &str = "datastore_handle_disconnect_failures_ignored_total";
/// Closes that released a live client
pub const CLOSES: &str = "datastore_handle_closes_total";
/// Closes that gave up waiting for disconnect
pub const CLOSE_TIMEOUTS: &str = "datastore_handle_close_timeouts_total";

/// Driver connect duration in milliseconds
pub const CONNECT_DURATION_MS: &str = "datastore_handle_connect_duration_ms";
/// Health ping duration in milliseconds
pub const PING_DURATION_MS: &str = "datastore_handle_ping_duration_ms";
