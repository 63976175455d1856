//! Group service implementation
//!
//! Groups are read-only from the outside; only the enrollment flow creates
//! them or changes their membership.

use crate::config::CatalogConfig;
use crate::database::store::SharedStore;
use crate::models::{GroupDetails, GroupFilter, Pagination};
use crate::utils::errors::{PlatformError, Result};

#[derive(Clone)]
pub struct GroupService {
    store: SharedStore,
    catalog: CatalogConfig,
}

impl GroupService {
    pub fn new(store: SharedStore, catalog: CatalogConfig) -> Self {
        Self { store, catalog }
    }

    pub async fn get_group(&self, group_id: i64) -> Result<GroupDetails> {
        self.store
            .find_group(group_id)
            .await?
            .ok_or(PlatformError::GroupNotFound { group_id })
    }

    pub async fn list_groups(&self, filter: &GroupFilter) -> Result<Vec<GroupDetails>> {
        let pagination = Pagination {
            skip: filter.skip,
            limit: filter.limit,
        };
        self.store
            .list_groups(filter.product_id, pagination.page(self.catalog.max_page_size))
            .await
    }
}
