//! Driver adapters
//!
//! A driver is the boundary to an external datastore crate. The handle only
//! ever asks it to connect, ping and disconnect; everything else about the
//! datastore stays inside the driver crate.

#[cfg(feature = "mongodb")]
mod mongo;
#[cfg(feature = "redis")]
mod redis;

#[cfg(feature = "mongodb")]
pub use mongo::{MongoDriver, MongoOptions};
#[cfg(feature = "redis")]
pub use self::redis::{RedisClient, RedisDriver, RedisOptions};

use crate::connection::{ConnectionUrl, Credentials};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Error raised by a driver
///
/// Cloning is cheap, so one failed connect can be handed to every caller
/// that was waiting on it.
#[derive(Clone)]
pub struct DriverError(Arc<dyn std::error::Error + Send + Sync + 'static>);

impl DriverError {
    /// Wrap a driver crate error
    pub fn new<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Error carrying only a message
    pub fn msg(message: impl Into<String>) -> Self {
        let boxed: Box<dyn std::error::Error + Send + Sync> = message.into().into();
        Self(Arc::from(boxed))
    }
}

impl fmt::Debug for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Capability set of one datastore family
///
/// `Client` must be a cheap, shareable handle (the driver crates already
/// reference-count their clients); the connection handle hands out clones of
/// it.
#[async_trait]
pub trait Driver: Send + Sync + 'static {
    /// Live client produced by `connect`
    type Client: Clone + Send + Sync + 'static;

    /// Driver options merged with the URL at connect time
    type Options: Clone + fmt::Debug + Send + Sync + 'static;

    /// Datastore family name, used in logs and metric labels
    fn family(&self) -> &'static str;

    /// URL schemes this driver accepts
    fn schemes(&self) -> &'static [&'static str];

    /// Reject options no connect attempt could succeed with
    fn check_options(&self, _options: &Self::Options) -> Result<(), DriverError> {
        Ok(())
    }

    /// Create a new client. It has not been health-checked yet.
    async fn connect(
        &self,
        url: &ConnectionUrl,
        credentials: Option<&Credentials>,
        options: &Self::Options,
    ) -> Result<Self::Client, DriverError>;

    /// Health check round trip
    async fn ping(&self, client: &Self::Client) -> Result<(), DriverError>;

    /// Release the client's resources
    async fn disconnect(&self, client: &Self::Client) -> Result<(), DriverError>;
}
