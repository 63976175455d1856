//! Product statistics
//!
//! Read-only aggregation over the current store state. Percentages are
//! returned as raw floats without rounding.

use tracing::debug;
use crate::config::CatalogConfig;
use crate::database::store::SharedStore;
use crate::models::{GroupOccupancy, Pagination, Product, ProductStats};
use crate::utils::errors::{PlatformError, Result};
use crate::utils::helpers::percentage;

/// Mean group occupancy in percent; 0 for a product without groups
pub fn fill_percentage(groups: &[GroupOccupancy], capacity: i32) -> f64 {
    if groups.is_empty() {
        return 0.0;
    }

    let total: f64 = groups
        .iter()
        .map(|g| percentage(g.member_count, i64::from(capacity)))
        .sum();
    total / groups.len() as f64
}

/// Assemble the statistics bundle from already counted inputs
pub fn compute_stats(
    product: &Product,
    lessons_count: i64,
    students_count: i64,
    total_users: i64,
    groups: &[GroupOccupancy],
) -> ProductStats {
    ProductStats {
        product_id: product.id,
        name: product.name.clone(),
        lessons_count,
        students_count,
        groups_count: groups.len() as i64,
        fill_percentage: fill_percentage(groups, product.max_users_in_group),
        purchase_percentage: percentage(students_count, total_users),
    }
}

/// Statistics service computing per-product metrics
#[derive(Clone)]
pub struct StatisticsService {
    store: SharedStore,
    catalog: CatalogConfig,
}

impl StatisticsService {
    pub fn new(store: SharedStore, catalog: CatalogConfig) -> Self {
        Self { store, catalog }
    }

    /// Statistics for one product
    pub async fn product_stats(&self, product_id: i64) -> Result<ProductStats> {
        let product = self
            .store
            .find_product(product_id)
            .await?
            .ok_or(PlatformError::ProductNotFound { product_id })?;

        let total_users = self.store.count_users().await?;
        self.stats_for(&product, total_users).await
    }

    /// Statistics for a page of products
    pub async fn all_product_stats(&self, pagination: &Pagination) -> Result<Vec<ProductStats>> {
        let products = self
            .store
            .list_products(pagination.page(self.catalog.max_page_size))
            .await?;
        let total_users = self.store.count_users().await?;

        let mut stats = Vec::with_capacity(products.len());
        for product in &products {
            stats.push(self.stats_for(product, total_users).await?);
        }

        Ok(stats)
    }

    async fn stats_for(&self, product: &Product, total_users: i64) -> Result<ProductStats> {
        let lessons_count = self.store.count_lessons(product.id).await?;
        let students_count = self.store.count_students(product.id).await?;
        let groups = self.store.group_occupancy(product.id).await?;

        let stats = compute_stats(product, lessons_count, students_count, total_users, &groups);
        debug!(
            product_id = product.id,
            fill_percentage = stats.fill_percentage,
            purchase_percentage = stats.purchase_percentage,
            "Computed product statistics"
        );

        Ok(stats)
    }
}
