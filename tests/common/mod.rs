//! Scripted driver for lifecycle tests

#![allow(dead_code)]

use async_trait::async_trait;
use datastore_handle::{
    ConnectionHandle, ConnectionUrl, Credentials, Driver, DriverError, HandleConfig,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Install a test subscriber once; `RUST_LOG=debug` shows handle logs
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Options recorded by the mock on every connect
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MockOptions {
    pub label: String,
}

impl MockOptions {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

/// Client handed out by the mock; health can be flipped per client
#[derive(Debug, Clone)]
pub struct MockClient {
    pub id: usize,
    healthy: Arc<AtomicBool>,
}

impl MockClient {
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

/// What the mock was asked to do, and what it should do
#[derive(Default)]
pub struct Script {
    pub connects: AtomicUsize,
    pub pings: AtomicUsize,
    pub disconnects: AtomicUsize,
    pub disconnected_ids: Mutex<Vec<usize>>,
    pub last_connect: Mutex<Option<(String, Option<Credentials>, MockOptions)>>,

    pub fail_connect: AtomicBool,
    pub new_clients_unhealthy: AtomicBool,
    pub fail_disconnect: AtomicBool,
    pub hang_disconnect: AtomicBool,
    pub connect_delay_ms: AtomicUsize,
}

impl Script {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    pub fn disconnects(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }

    pub fn disconnected_ids(&self) -> Vec<usize> {
        self.disconnected_ids.lock().unwrap().clone()
    }

    pub fn set(&self, flag: &AtomicBool, value: bool) {
        flag.store(value, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub struct MockDriver {
    pub script: Arc<Script>,
}

#[async_trait]
impl Driver for MockDriver {
    type Client = MockClient;
    type Options = MockOptions;

    fn family(&self) -> &'static str {
        "mock"
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["mock"]
    }

    fn check_options(&self, options: &MockOptions) -> Result<(), DriverError> {
        if options.label == "invalid" {
            return Err(DriverError::msg("label rejected"));
        }
        Ok(())
    }

    async fn connect(
        &self,
        url: &ConnectionUrl,
        credentials: Option<&Credentials>,
        options: &MockOptions,
    ) -> Result<MockClient, DriverError> {
        let id = self.script.connects.fetch_add(1, Ordering::SeqCst) + 1;
        *self.script.last_connect.lock().unwrap() =
            Some((url.as_str().to_string(), credentials.cloned(), options.clone()));

        let delay = self.script.connect_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }

        if self.script.fail_connect.load(Ordering::SeqCst) {
            return Err(DriverError::msg(format!("connection refused (attempt {})", id)));
        }
        let healthy = !self.script.new_clients_unhealthy.load(Ordering::SeqCst);
        Ok(MockClient {
            id,
            healthy: Arc::new(AtomicBool::new(healthy)),
        })
    }

    async fn ping(&self, client: &MockClient) -> Result<(), DriverError> {
        self.script.pings.fetch_add(1, Ordering::SeqCst);
        if client.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DriverError::msg(format!("client {} is not answering", client.id)))
        }
    }

    async fn disconnect(&self, client: &MockClient) -> Result<(), DriverError> {
        self.script.disconnects.fetch_add(1, Ordering::SeqCst);
        self.script.disconnected_ids.lock().unwrap().push(client.id);
        if self.script.hang_disconnect.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.script.fail_disconnect.load(Ordering::SeqCst) {
            return Err(DriverError::msg("disconnect failed"));
        }
        Ok(())
    }
}

/// Uninitialized handle plus the script driving it
pub fn mock_handle() -> (ConnectionHandle<MockDriver>, Arc<Script>) {
    init_tracing();
    let driver = MockDriver::default();
    let script = driver.script.clone();
    let handle = ConnectionHandle::new(
        driver,
        HandleConfig::builder("mock://db.internal:9000/app")
            .username("svc")
            .password("secret")
            .build(),
    )
    .expect("valid mock URL");
    (handle, script)
}

/// Initialized handle plus the script driving it
pub fn configured_handle() -> (ConnectionHandle<MockDriver>, Arc<Script>) {
    let (mut handle, script) = mock_handle();
    handle.load_config(MockOptions::new("default"));
    (handle, script)
}
