//! Shared utilities for integration tests.

use std::net::SocketAddr;

use customer_registry::config::RegistryConfig;
use customer_registry::{CustomerStore, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A registry server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: CustomerStore,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Trigger shutdown and wait for the server task to finish.
    #[allow(dead_code)]
    pub async fn stop(self) -> std::io::Result<()> {
        self.shutdown.trigger();
        self.handle.await.expect("server task panicked")
    }
}

/// Start a registry with the four seed customers.
pub async fn start_seeded() -> TestServer {
    start_with_store(CustomerStore::seeded()).await
}

/// Start a registry around the given store.
pub async fn start_with_store(store: CustomerStore) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = RegistryConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_store(config, store);
    let store = server.store().clone();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        store,
        shutdown,
        handle,
    }
}
