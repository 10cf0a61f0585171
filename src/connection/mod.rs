//! Connection management
//!
//! This module handles:
//! * Handle configuration (URL, credentials)
//! * URL parsing and redaction
//! * Lifecycle state machine enforcement
//! * The connection handle itself: lazy connect, health check, replacement

mod config;
mod handle;
mod state;
mod url;

pub use config::{Credentials, HandleConfig, HandleConfigBuilder};
pub use handle::{ConnectionHandle, CLOSE_TIMEOUT, DISCARD_TIMEOUT};
pub use state::HandleState;
pub use url::ConnectionUrl;
