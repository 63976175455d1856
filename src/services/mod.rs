//! Services module
//!
//! This module contains business logic services

pub mod access;
pub mod assignment;
pub mod group;
pub mod lesson;
pub mod product;
pub mod stats;
pub mod user;

// Re-export commonly used services
pub use access::AccessService;
pub use assignment::{assign_user_to_group, pick_group};
pub use group::GroupService;
pub use lesson::LessonService;
pub use product::ProductService;
pub use stats::StatisticsService;
pub use user::UserService;

use crate::config::CatalogConfig;
use crate::database::store::SharedStore;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub user_service: UserService,
    pub product_service: ProductService,
    pub lesson_service: LessonService,
    pub group_service: GroupService,
    pub access_service: AccessService,
    pub statistics_service: StatisticsService,
    store: SharedStore,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one store
    pub fn new(store: SharedStore, catalog: CatalogConfig) -> Self {
        Self {
            user_service: UserService::new(store.clone()),
            product_service: ProductService::new(store.clone(), catalog.clone()),
            lesson_service: LessonService::new(store.clone(), catalog.clone()),
            group_service: GroupService::new(store.clone(), catalog.clone()),
            access_service: AccessService::new(store.clone()),
            statistics_service: StatisticsService::new(store.clone(), catalog),
            store,
        }
    }

    /// Health check of the backing store
    pub async fn health_check(&self) -> Result<()> {
        self.store.health_check().await
    }
}
