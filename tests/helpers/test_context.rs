//! Test context for unified test setup
//!
//! Builds the full service stack over a fresh in-memory store so tests run
//! without external infrastructure.

use std::sync::{Arc, Once};
use axum_test::TestServer;
use edu_platform::config::{Settings, StoreBackend};
use edu_platform::{build_app, MemoryStore, ServiceFactory, SharedStore};

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Services and settings wired over one store
pub struct TestContext {
    pub store: SharedStore,
    pub services: ServiceFactory,
    pub settings: Settings,
}

impl TestContext {
    /// Create a context backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Create a context over an existing store
    pub fn with_store(store: SharedStore) -> Self {
        init_test_logging();

        let mut settings = Settings::default();
        settings.database.backend = StoreBackend::Memory;

        let services = ServiceFactory::new(store.clone(), settings.catalog.clone());
        Self {
            store,
            services,
            settings,
        }
    }

    /// HTTP test server over the same store
    pub fn server(&self) -> TestServer {
        TestServer::new(build_app(self.store.clone(), &self.settings)).expect("Failed to start test server")
    }
}
