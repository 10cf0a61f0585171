//! MongoDB driver adapter

use super::{Driver, DriverError};
use crate::connection::{ConnectionHandle, ConnectionUrl, Credentials, HandleConfig};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Credential, ReadPreference, SelectionCriteria};
use mongodb::Client;
use serde::Deserialize;
use std::time::Duration;

/// MongoDB client options
///
/// Applied on top of the options parsed from the URL. The default value is
/// the empty option set, leaving the URL in charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MongoOptions {
    /// Application name reported to the server
    pub app_name: Option<String>,
    /// Timeout for establishing a connection, in milliseconds
    pub connect_timeout_ms: Option<u64>,
    /// Timeout for selecting a server, in milliseconds
    pub server_selection_timeout_ms: Option<u64>,
    /// Maximum connections in the driver pool
    pub max_pool_size: Option<u32>,
    /// Minimum connections in the driver pool
    pub min_pool_size: Option<u32>,
    /// Talk to the given host only, bypassing topology discovery
    pub direct_connection: Option<bool>,
    /// Replica set name
    pub replica_set: Option<String>,
    /// Default database
    pub default_database: Option<String>,
}

impl MongoOptions {
    /// Set application name
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Set server selection timeout
    pub fn server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Set maximum pool size
    pub fn max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = Some(size);
        self
    }

    /// Overlay these options onto driver options; set fields win
    pub fn apply_to(&self, opts: &mut ClientOptions) {
        if let Some(name) = &self.app_name {
            opts.app_name = Some(name.clone());
        }
        if let Some(ms) = self.connect_timeout_ms {
            opts.connect_timeout = Some(Duration::from_millis(ms));
        }
        if let Some(ms) = self.server_selection_timeout_ms {
            opts.server_selection_timeout = Some(Duration::from_millis(ms));
        }
        if let Some(size) = self.max_pool_size {
            opts.max_pool_size = Some(size);
        }
        if let Some(size) = self.min_pool_size {
            opts.min_pool_size = Some(size);
        }
        if let Some(direct) = self.direct_connection {
            opts.direct_connection = Some(direct);
        }
        if let Some(name) = &self.replica_set {
            opts.repl_set_name = Some(name.clone());
        }
        if let Some(db) = &self.default_database {
            opts.default_database = Some(db.clone());
        }
    }
}

/// Overlay explicit credentials, keeping auth source and mechanism from the URL
fn apply_credentials(opts: &mut ClientOptions, credentials: &Credentials) {
    if credentials.is_empty() {
        return;
    }
    let credential = opts.credential.get_or_insert_with(Credential::default);
    if let Some(username) = &credentials.username {
        credential.username = Some(username.clone());
    }
    if let Some(password) = &credentials.password {
        credential.password = Some(password.clone());
    }
}

/// MongoDB driver
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoDriver;

#[async_trait]
impl Driver for MongoDriver {
    type Client = Client;
    type Options = MongoOptions;

    fn family(&self) -> &'static str {
        "mongodb"
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["mongodb", "mongodb+srv"]
    }

    async fn connect(
        &self,
        url: &ConnectionUrl,
        credentials: Option<&Credentials>,
        options: &MongoOptions,
    ) -> Result<Client, DriverError> {
        let mut opts = ClientOptions::parse(url.as_str())
            .await
            .map_err(DriverError::new)?;
        options.apply_to(&mut opts);
        if let Some(creds) = credentials {
            apply_credentials(&mut opts, creds);
        }
        Client::with_options(opts).map_err(DriverError::new)
    }

    async fn ping(&self, client: &Client) -> Result<(), DriverError> {
        // Health is judged by the primary, not whichever member answers first
        client
            .database("admin")
            .run_command(
                doc! { "ping": 1 },
                SelectionCriteria::ReadPreference(ReadPreference::Primary),
            )
            .await
            .map(|_| ())
            .map_err(DriverError::new)
    }

    async fn disconnect(&self, client: &Client) -> Result<(), DriverError> {
        // Does not wait for cursors or sessions the application still holds
        client.clone().shutdown_immediate().await;
        Ok(())
    }
}

impl ConnectionHandle<MongoDriver> {
    /// Uninitialized handle for a MongoDB deployment
    pub fn mongodb(config: HandleConfig) -> crate::Result<Self> {
        Self::new(MongoDriver, config)
    }
}
