//! Lesson repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::lesson::{Lesson, CreateLessonRequest};
use crate::models::pagination::Page;
use crate::utils::errors::PlatformError;

#[derive(Clone, Debug)]
pub struct LessonRepository {
    pool: PgPool,
}

impl LessonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new lesson
    pub async fn create(&self, request: CreateLessonRequest) -> Result<Lesson, PlatformError> {
        let lesson = sqlx::query_as::<_, Lesson>(
            r#"
            INSERT INTO lessons (product_id, name, video_url, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, product_id, name, video_url, created_at
            "#
        )
        .bind(request.product_id)
        .bind(request.name)
        .bind(request.video_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(lesson)
    }

    /// Find lesson by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Lesson>, PlatformError> {
        let lesson = sqlx::query_as::<_, Lesson>(
            "SELECT id, product_id, name, video_url, created_at FROM lessons WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(lesson)
    }

    /// List all lessons with pagination
    pub async fn list(&self, page: Page) -> Result<Vec<Lesson>, PlatformError> {
        let lessons = sqlx::query_as::<_, Lesson>(
            "SELECT id, product_id, name, video_url, created_at FROM lessons ORDER BY id ASC LIMIT $1 OFFSET $2"
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(lessons)
    }

    /// Get lessons of a product
    pub async fn find_by_product(&self, product_id: i64) -> Result<Vec<Lesson>, PlatformError> {
        let lessons = sqlx::query_as::<_, Lesson>(
            "SELECT id, product_id, name, video_url, created_at FROM lessons WHERE product_id = $1 ORDER BY id ASC"
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lessons)
    }

    /// Count lessons of a product
    pub async fn count_by_product(&self, product_id: i64) -> Result<i64, PlatformError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lessons WHERE product_id = $1")
            .bind(product_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
