//! Lazy, self-healing connection handles for MongoDB and Redis
//!
//! A [`ConnectionHandle`] owns the configuration of one datastore and at most
//! one live driver client. The client is created on first use, pinged before
//! every reuse and replaced when the ping fails. One async mutex serializes
//! all of this, so concurrent callers share a single client and never race
//! to create two.
//!
//! The datastore specifics live behind the [`Driver`] trait. Two drivers ship
//! with the crate, each behind a cargo feature of the same name:
//!
//! * `mongodb`: [`MongoDriver`], handle alias [`MongoConnection`]
//! * `redis`: [`RedisDriver`], handle alias [`RedisConnection`]
//!
//! ```no_run
//! # async fn example() -> datastore_handle::Result<()> {
//! use datastore_handle::{HandleConfig, MongoConnection, MongoOptions};
//! use std::sync::Arc;
//!
//! let config = HandleConfig::builder("mongodb://db1:27017,db2:27017/app")
//!     .username("app")
//!     .password("secret")
//!     .build();
//!
//! let mut handle = MongoConnection::mongodb(config)?;
//! handle.load_config(MongoOptions::default().app_name("billing"));
//! let handle = Arc::new(handle);
//!
//! let client = handle.get_connection().await?;
//! let orders = client.database("app").collection::<mongodb::bson::Document>("orders");
//! # let _ = orders;
//!
//! handle.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod driver;
pub mod error;
pub mod metrics;

pub use connection::{
    ConnectionHandle, ConnectionUrl, Credentials, HandleConfig, HandleState, CLOSE_TIMEOUT,
    DISCARD_TIMEOUT,
};
pub use driver::{Driver, DriverError};
pub use error::{Error, Result};

#[cfg(feature = "mongodb")]
pub use driver::{MongoDriver, MongoOptions};
#[cfg(feature = "redis")]
pub use driver::{RedisClient, RedisDriver, RedisOptions};

/// Connection handle for a MongoDB deployment
#[cfg(feature = "mongodb")]
pub type MongoConnection = ConnectionHandle<MongoDriver>;

/// Connection handle for a Redis server
#[cfg(feature = "redis")]
pub type RedisConnection = ConnectionHandle<RedisDriver>;
