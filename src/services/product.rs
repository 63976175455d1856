//! Product service implementation
//!
//! This service handles product creation, validation and updates, and
//! decorates products with their lesson counts for API responses.

use rust_decimal::Decimal;
use tracing::{debug, info};
use crate::config::CatalogConfig;
use crate::database::store::SharedStore;
use crate::models::product::{CreateProductRequest, Product, ProductResponse, UpdateProductRequest};
use crate::models::Pagination;
use crate::utils::errors::{PlatformError, Result};
use crate::utils::helpers::validate_name;
use crate::utils::logging;

/// Product service for managing the course catalog
#[derive(Clone)]
pub struct ProductService {
    store: SharedStore,
    catalog: CatalogConfig,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(store: SharedStore, catalog: CatalogConfig) -> Self {
        Self { store, catalog }
    }

    /// Create a product after validating it and filling in group size defaults
    pub async fn create_product(&self, mut request: CreateProductRequest) -> Result<ProductResponse> {
        request.name = validate_name("Product name", &request.name)?;
        let min_users = request
            .min_users_in_group
            .unwrap_or(self.catalog.default_min_users_in_group);
        let max_users = request
            .max_users_in_group
            .unwrap_or(self.catalog.default_max_users_in_group);
        validate_group_bounds(min_users, max_users)?;
        validate_cost(request.cost)?;
        request.min_users_in_group = Some(min_users);
        request.max_users_in_group = Some(max_users);

        if self.store.find_user(request.creator_id).await?.is_none() {
            return Err(PlatformError::UserNotFound { user_id: request.creator_id });
        }

        let product = self.store.create_product(request).await?;
        logging::log_catalog_change("product", product.id, "created");

        Ok(ProductResponse { product, lessons_count: 0 })
    }

    /// Get product by ID
    pub async fn get_product(&self, product_id: i64) -> Result<ProductResponse> {
        debug!(product_id = product_id, "Getting product by ID");
        let product = self.require_product(product_id).await?;
        self.with_lessons_count(product).await
    }

    /// List products
    pub async fn list_products(&self, pagination: &Pagination) -> Result<Vec<ProductResponse>> {
        let products = self
            .store
            .list_products(pagination.page(self.catalog.max_page_size))
            .await?;

        let mut responses = Vec::with_capacity(products.len());
        for product in products {
            responses.push(self.with_lessons_count(product).await?);
        }

        Ok(responses)
    }

    /// Apply a partial update; the merged product must still be valid
    pub async fn update_product(&self, product_id: i64, mut request: UpdateProductRequest) -> Result<ProductResponse> {
        let existing = self.require_product(product_id).await?;

        if let Some(name) = &request.name {
            request.name = Some(validate_name("Product name", name)?);
        }
        let merged = request.apply_to(&existing);
        validate_group_bounds(merged.min_users_in_group, merged.max_users_in_group)?;
        validate_cost(merged.cost)?;

        let product = self
            .store
            .update_product(product_id, request)
            .await?
            .ok_or(PlatformError::ProductNotFound { product_id })?;
        info!(product_id = product_id, "Product updated successfully");

        self.with_lessons_count(product).await
    }

    /// Delete a product together with its lessons, groups and accesses
    pub async fn delete_product(&self, product_id: i64) -> Result<()> {
        if !self.store.delete_product(product_id).await? {
            return Err(PlatformError::ProductNotFound { product_id });
        }
        logging::log_catalog_change("product", product_id, "deleted");

        Ok(())
    }

    async fn require_product(&self, product_id: i64) -> Result<Product> {
        self.store
            .find_product(product_id)
            .await?
            .ok_or(PlatformError::ProductNotFound { product_id })
    }

    async fn with_lessons_count(&self, product: Product) -> Result<ProductResponse> {
        let lessons_count = self.store.count_lessons(product.id).await?;
        Ok(ProductResponse { product, lessons_count })
    }
}

/// `1 <= min <= max`
fn validate_group_bounds(min_users: i32, max_users: i32) -> Result<()> {
    if max_users < 1 {
        return Err(PlatformError::InvalidInput(
            "max_users_in_group must be at least 1".to_string(),
        ));
    }
    if min_users < 1 || min_users > max_users {
        return Err(PlatformError::InvalidInput(format!(
            "min_users_in_group must be between 1 and {}",
            max_users
        )));
    }
    Ok(())
}

fn validate_cost(cost: Decimal) -> Result<()> {
    if cost < Decimal::ZERO {
        return Err(PlatformError::InvalidInput("cost must not be negative".to_string()));
    }
    if cost.normalize().scale() > 2 {
        return Err(PlatformError::InvalidInput(
            "cost must have at most two decimal places".to_string(),
        ));
    }
    Ok(())
}
