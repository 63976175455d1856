//! Access repository implementation
//!
//! Accesses are only written through an enrollment transaction; this
//! repository covers the read side.

use sqlx::PgPool;
use crate::utils::errors::PlatformError;

#[derive(Clone, Debug)]
pub struct AccessRepository {
    pool: PgPool,
}

impl AccessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check if user holds an access to the product
    pub async fn exists(&self, user_id: i64, product_id: i64) -> Result<bool, PlatformError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM accesses WHERE user_id = $1 AND product_id = $2)"
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    /// Count distinct users with an access to the product
    pub async fn count_distinct_users(&self, product_id: i64) -> Result<i64, PlatformError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT user_id) FROM accesses WHERE product_id = $1"
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
