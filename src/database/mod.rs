//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod enrollment;
pub mod memory;
pub mod repositories;
pub mod service;
pub mod store;

// Re-export commonly used database components
pub use connection::{DatabasePool, DatabaseConfig, create_pool, run_migrations, health_check};
pub use memory::MemoryStore;
pub use repositories::{UserRepository, ProductRepository, LessonRepository, GroupRepository, AccessRepository};
pub use service::DatabaseService;
pub use store::{EnrollmentTx, SharedStore, Store};
