//! Redis driver adapter

use super::{Driver, DriverError};
use crate::connection::{ConnectionHandle, ConnectionUrl, Credentials, HandleConfig};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Client, ConnectionInfo, IntoConnectionInfo};
use serde::Deserialize;
use std::time::Duration;

/// Highest database index a default Redis server exposes
const MAX_DATABASE: i64 = 15;

/// Redis client options
///
/// Applied on top of whatever the URL specifies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedisOptions {
    /// Database index (0-15), overrides the URL path
    pub database: Option<i64>,
    /// Timeout for establishing the connection, in milliseconds
    pub connection_timeout_ms: Option<u64>,
    /// Timeout for the health check PING reply, in milliseconds
    pub response_timeout_ms: Option<u64>,
}

impl RedisOptions {
    /// Set the database index
    pub fn database(mut self, database: i64) -> Self {
        self.database = Some(database);
        self
    }

    /// Set the connection timeout
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Set the response timeout
    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    fn validate(&self) -> Result<(), DriverError> {
        match self.database {
            Some(db) if !(0..=MAX_DATABASE).contains(&db) => Err(DriverError::msg(format!(
                "database index out of range: {}",
                db
            ))),
            _ => Ok(()),
        }
    }
}

/// Run `fut`, bounded by `limit` when one is set
async fn bounded<T, F>(limit: Option<u64>, what: &str, fut: F) -> Result<T, DriverError>
where
    F: std::future::Future<Output = redis::RedisResult<T>>,
{
    let result = match limit {
        Some(ms) => tokio::time::timeout(Duration::from_millis(ms), fut)
            .await
            .map_err(|_| DriverError::msg(format!("{} timed out after {}ms", what, ms)))?,
        None => fut.await,
    };
    result.map_err(DriverError::new)
}

/// Merge URL, credentials and options into driver connection info
fn connection_info(
    url: &ConnectionUrl,
    credentials: Option<&Credentials>,
    options: &RedisOptions,
) -> Result<ConnectionInfo, DriverError> {
    let mut info = url.as_str().into_connection_info().map_err(DriverError::new)?;

    options.validate()?;
    if let Some(db) = options.database {
        info.redis.db = db;
    }

    if let Some(creds) = credentials {
        if let Some(username) = &creds.username {
            info.redis.username = Some(username.clone());
        }
        if let Some(password) = &creds.password {
            info.redis.password = Some(password.clone());
        }
    }

    Ok(info)
}

/// Connected Redis client
///
/// Cloning shares the underlying multiplexed connection.
#[derive(Debug, Clone)]
pub struct RedisClient {
    client: Client,
    conn: MultiplexedConnection,
    ping_timeout_ms: Option<u64>,
}

impl RedisClient {
    /// Multiplexed connection for issuing commands
    pub fn connection(&self) -> MultiplexedConnection {
        self.conn.clone()
    }

    /// Driver client the connection was opened from
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Redis driver
#[derive(Debug, Clone, Copy, Default)]
pub struct RedisDriver;

#[async_trait]
impl Driver for RedisDriver {
    type Client = RedisClient;
    type Options = RedisOptions;

    fn family(&self) -> &'static str {
        "redis"
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["redis", "rediss", "redis+unix", "unix"]
    }

    fn check_options(&self, options: &RedisOptions) -> Result<(), DriverError> {
        options.validate()
    }

    async fn connect(
        &self,
        url: &ConnectionUrl,
        credentials: Option<&Credentials>,
        options: &RedisOptions,
    ) -> Result<RedisClient, DriverError> {
        let info = connection_info(url, credentials, options)?;
        let client = Client::open(info).map_err(DriverError::new)?;
        let conn = bounded(
            options.connection_timeout_ms,
            "connect",
            client.get_multiplexed_async_connection(),
        )
        .await?;
        Ok(RedisClient {
            client,
            conn,
            ping_timeout_ms: options.response_timeout_ms,
        })
    }

    async fn ping(&self, client: &RedisClient) -> Result<(), DriverError> {
        let mut conn = client.connection();
        let ping = redis::cmd("PING");
        let reply: String =
            bounded(client.ping_timeout_ms, "PING", ping.query_async(&mut conn)).await?;
        if reply != "PONG" {
            return Err(DriverError::msg(format!(
                "unexpected PING reply: {}",
                reply
            )));
        }
        Ok(())
    }

    async fn disconnect(&self, _client: &RedisClient) -> Result<(), DriverError> {
        // The multiplexed connection closes once the last clone is dropped
        tracing::debug!("released redis connection");
        Ok(())
    }
}

impl ConnectionHandle<RedisDriver> {
    /// Uninitialized handle for a Redis server
    pub fn redis(config: HandleConfig) -> crate::Result<Self> {
        Self::new(RedisDriver, config)
    }
}
