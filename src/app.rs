//! Application assembly
//!
//! Wires configuration into a store, the services and the HTTP router.

use std::sync::Arc;
use axum::Router;
use tracing::info;
use crate::config::{Settings, StoreBackend};
use crate::database::connection::{create_pool, run_migrations, DatabaseConfig};
use crate::database::{DatabaseService, MemoryStore, SharedStore};
use crate::handlers::{router, AppState};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Open the store selected by `database.backend`
pub async fn build_store(settings: &Settings) -> Result<SharedStore> {
    match settings.database.backend {
        StoreBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;
            if settings.database.run_migrations {
                run_migrations(&pool).await?;
            }
            Ok(Arc::new(DatabaseService::new(pool)))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Build the router over an already opened store
pub fn build_app(store: SharedStore, settings: &Settings) -> Router {
    let services = ServiceFactory::new(store, settings.catalog.clone());
    router(AppState::new(services))
}
