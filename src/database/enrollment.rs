//! PostgreSQL enrollment transaction

use std::time::Instant;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Postgres, Transaction};
use crate::database::repositories::group::fetch_occupancy;
use crate::database::repositories::product::PRODUCT_COLUMNS;
use crate::database::store::EnrollmentTx;
use crate::models::*;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Enrollment unit of work over a single database transaction
pub struct PgEnrollment {
    tx: Transaction<'static, Postgres>,
    started: Instant,
}

impl PgEnrollment {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx,
            started: Instant::now(),
        }
    }
}

#[async_trait]
impl EnrollmentTx for PgEnrollment {
    async fn lock_product(&mut self, product_id: i64) -> Result<Option<Product>> {
        // Row lock held until commit; serializes enrollments per product
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
        ))
        .bind(product_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(product)
    }

    async fn user_exists(&mut self, user_id: i64) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&mut *self.tx)
            .await?;

        Ok(exists.0)
    }

    async fn insert_access(&mut self, request: &GrantAccessRequest) -> Result<Access> {
        let access = sqlx::query_as::<_, Access>(
            r#"
            INSERT INTO accesses (user_id, product_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, product_id, created_at
            "#
        )
        .bind(request.user_id)
        .bind(request.product_id)
        .bind(Utc::now())
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(access)
    }

    async fn group_of_member(&mut self, product_id: i64, user_id: i64) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            SELECT g.id, g.product_id, g.name, g.created_at
            FROM groups g
            INNER JOIN group_members gm ON gm.group_id = g.id
            WHERE g.product_id = $1 AND gm.user_id = $2
            ORDER BY g.id ASC
            LIMIT 1
            "#
        )
        .bind(product_id)
        .bind(user_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(group)
    }

    async fn group_occupancy(&mut self, product_id: i64) -> Result<Vec<GroupOccupancy>> {
        fetch_occupancy(&mut *self.tx, product_id).await
    }

    async fn create_group(&mut self, product_id: i64, name: &str) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (product_id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, name, created_at
            "#
        )
        .bind(product_id)
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(group)
    }

    async fn add_member(&mut self, group_id: i64, user_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO group_members (group_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (group_id, user_id) DO NOTHING
            "#
        )
        .bind(group_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let PgEnrollment { tx, started } = *self;
        let result = tx.commit().await;
        logging::log_database_operation(
            "enrollment_commit",
            "accesses",
            started.elapsed().as_millis() as u64,
            result.is_ok(),
        );
        result?;

        Ok(())
    }
}
