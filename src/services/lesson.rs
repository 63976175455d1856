//! Lesson service implementation
//!
//! Lessons are readable by anyone through the catalog listing, but the
//! per-product lesson list is only served to users who bought the product.

use tracing::{debug, warn};
use crate::config::CatalogConfig;
use crate::database::store::SharedStore;
use crate::models::lesson::{CreateLessonRequest, Lesson};
use crate::models::Pagination;
use crate::utils::errors::{PlatformError, Result};
use crate::utils::helpers::{validate_name, validate_video_url};
use crate::utils::logging;

#[derive(Clone)]
pub struct LessonService {
    store: SharedStore,
    catalog: CatalogConfig,
}

impl LessonService {
    pub fn new(store: SharedStore, catalog: CatalogConfig) -> Self {
        Self { store, catalog }
    }

    /// Add a lesson to an existing product
    pub async fn create_lesson(&self, mut request: CreateLessonRequest) -> Result<Lesson> {
        request.name = validate_name("Lesson name", &request.name)?;
        request.video_url = validate_video_url(&request.video_url)?;

        if self.store.find_product(request.product_id).await?.is_none() {
            return Err(PlatformError::ProductNotFound { product_id: request.product_id });
        }

        let lesson = self.store.create_lesson(request).await?;
        logging::log_catalog_change("lesson", lesson.id, "created");

        Ok(lesson)
    }

    pub async fn get_lesson(&self, lesson_id: i64) -> Result<Lesson> {
        self.store
            .find_lesson(lesson_id)
            .await?
            .ok_or(PlatformError::LessonNotFound { lesson_id })
    }

    pub async fn list_lessons(&self, pagination: &Pagination) -> Result<Vec<Lesson>> {
        self.store
            .list_lessons(pagination.page(self.catalog.max_page_size))
            .await
    }

    /// Lessons of a product, for a user holding an access to it.
    ///
    /// Fails with `ProductNotFound` for an unknown product and with
    /// `PermissionDenied` when the user never bought it.
    pub async fn lessons_for_user(&self, user_id: i64, product_id: i64) -> Result<Vec<Lesson>> {
        debug!(user_id = user_id, product_id = product_id, "Listing product lessons for user");

        if self.store.find_product(product_id).await?.is_none() {
            return Err(PlatformError::ProductNotFound { product_id });
        }

        if !self.store.has_access(user_id, product_id).await? {
            warn!(user_id = user_id, product_id = product_id, "Lesson access denied");
            return Err(PlatformError::PermissionDenied { user_id, product_id });
        }

        self.store.lessons_for_product(product_id).await
    }
}
