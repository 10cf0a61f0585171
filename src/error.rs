//! Error types

use crate::driver::DriverError;
use std::time::Duration;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Handle error
///
/// Each variant names the lifecycle phase that failed. Driver failures are
/// kept as the error source.
#[derive(Debug, Error)]
pub enum Error {
    /// Operation invoked before `load_config`
    #[error("connection handle is not initialized")]
    NotInitialized,

    /// Handle was initialized without driver options
    #[error("missing client options")]
    MissingOptions,

    /// Driver failed to create a client
    #[error("failed to create client: {0}")]
    ConnectFailed(#[source] DriverError),

    /// Health ping of a freshly created client failed
    #[error("failed to verify connection: {0}")]
    VerifyFailed(#[source] DriverError),

    /// Driver failed to disconnect the client during close
    #[error("failed to disconnect client: {0}")]
    Disconnect(#[source] DriverError),

    /// Disconnect during close did not finish before the deadline
    #[error("disconnect timed out after {0:?}")]
    DisconnectTimeout(Duration),

    /// Invalid connection URL or options
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Illegal lifecycle transition
    #[error("invalid state: expected {expected}, got {actual}")]
    InvalidState {
        /// What the state machine allowed
        expected: String,
        /// What was requested
        actual: String,
    },
}

impl Error {
    /// Whether retrying the operation later could succeed.
    ///
    /// Configuration and lifecycle errors are permanent; driver-side
    /// failures usually are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::ConnectFailed(_)
                | Error::VerifyFailed(_)
                | Error::Disconnect(_)
                | Error::DisconnectTimeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_names_phase() {
        let err = Error::ConnectFailed(DriverError::msg("connection refused"));
        assert_eq!(
            err.to_string(),
            "failed to create client: connection refused"
        );

        let err = Error::VerifyFailed(DriverError::msg("no primary"));
        assert_eq!(err.to_string(), "failed to verify connection: no primary");

        let err = Error::DisconnectTimeout(Duration::from_secs(60));
        assert_eq!(err.to_string(), "disconnect timed out after 60s");
    }

    #[test]
    fn test_driver_error_is_source() {
        let err = Error::Disconnect(DriverError::msg("broken pipe"));
        let source = err.source().expect("driver error kept as source");
        assert_eq!(source.to_string(), "broken pipe");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(Error::ConnectFailed(DriverError::msg("x")).is_retryable());
        assert!(Error::DisconnectTimeout(Duration::from_secs(1)).is_retryable());
        assert!(!Error::NotInitialized.is_retryable());
        assert!(!Error::MissingOptions.is_retryable());
        assert!(!Error::Config("bad scheme".into()).is_retryable());
    }
}
