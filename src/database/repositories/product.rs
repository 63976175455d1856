//! Product repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::pagination::Page;
use crate::models::product::{Product, CreateProductRequest, UpdateProductRequest};
use crate::utils::errors::PlatformError;

pub(crate) const PRODUCT_COLUMNS: &str =
    "id, name, start_datetime, cost, creator_id, min_users_in_group, max_users_in_group, created_at";

#[derive(Clone, Debug)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, PlatformError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, start_datetime, cost, creator_id, min_users_in_group, max_users_in_group, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.start_datetime)
        .bind(request.cost)
        .bind(request.creator_id)
        .bind(request.min_users_in_group.unwrap_or(1))
        .bind(request.max_users_in_group.unwrap_or(10))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Find product by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Product>, PlatformError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// List products ordered by ID
    pub async fn list(&self, page: Page) -> Result<Vec<Product>, PlatformError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Update product fields that are present in the request
    pub async fn update(&self, id: i64, request: UpdateProductRequest) -> Result<Option<Product>, PlatformError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                start_datetime = COALESCE($3, start_datetime),
                cost = COALESCE($4, cost),
                min_users_in_group = COALESCE($5, min_users_in_group),
                max_users_in_group = COALESCE($6, max_users_in_group)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(request.name)
        .bind(request.start_datetime)
        .bind(request.cost)
        .bind(request.min_users_in_group)
        .bind(request.max_users_in_group)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Delete product; lessons, groups and accesses cascade
    pub async fn delete(&self, id: i64) -> Result<bool, PlatformError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
