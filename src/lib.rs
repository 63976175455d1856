//! EduPlatform backend
//!
//! Catalog of paid products and their lessons, purchase access control and
//! automatic distribution of buyers into capacity-bounded study groups.
//! Exposed as a JSON HTTP API backed by PostgreSQL or an in-memory store.

pub mod app;
pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PlatformError, Result};

// Re-export main components for easy access
pub use app::{build_app, build_store};
pub use database::{DatabaseService, MemoryStore, SharedStore};
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
