//! Test database helper utilities
//!
//! PostgreSQL tests run only when `TEST_DATABASE_URL` points at a scratch
//! database; otherwise they are skipped.

use sqlx::PgPool;
use edu_platform::DatabaseService;

/// Test database helper that manages PostgreSQL test database setup
pub struct TestDatabase {
    pub pool: PgPool,
    pub database_url: String,
}

impl TestDatabase {
    /// Connect and migrate, or `None` when no test database is configured
    pub async fn connect() -> Option<Self> {
        let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let db = Self { pool, database_url };
        db.cleanup().await.expect("Failed to clean test database");
        Some(db)
    }

    pub fn service(&self) -> DatabaseService {
        DatabaseService::new(self.pool.clone())
    }

    /// Remove all rows and reset sequences
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "TRUNCATE group_members, groups, accesses, lessons, products, users RESTART IDENTITY CASCADE",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn count_records(&self, table: &str) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", table);
        let count: (i64,) = sqlx::query_as(&query).fetch_one(&self.pool).await?;
        Ok(count.0)
    }
}
