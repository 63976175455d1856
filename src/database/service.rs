//! Database service layer
//!
//! This module provides a high-level interface to database operations and
//! implements the [`Store`] contract on top of the PostgreSQL repositories.

use async_trait::async_trait;
use crate::database::enrollment::PgEnrollment;
use crate::database::store::{EnrollmentTx, Store};
use crate::database::{
    AccessRepository, DatabasePool, GroupRepository, LessonRepository, ProductRepository, UserRepository,
};
use crate::models::*;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub users: UserRepository,
    pub products: ProductRepository,
    pub lessons: LessonRepository,
    pub groups: GroupRepository,
    pub accesses: AccessRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            lessons: LessonRepository::new(pool.clone()),
            groups: GroupRepository::new(pool.clone()),
            accesses: AccessRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl Store for DatabaseService {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        self.users.create(request).await
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn count_users(&self) -> Result<i64> {
        self.users.count().await
    }

    async fn create_product(&self, request: CreateProductRequest) -> Result<Product> {
        self.products.create(request).await
    }

    async fn find_product(&self, id: i64) -> Result<Option<Product>> {
        self.products.find_by_id(id).await
    }

    async fn list_products(&self, page: Page) -> Result<Vec<Product>> {
        self.products.list(page).await
    }

    async fn update_product(&self, id: i64, request: UpdateProductRequest) -> Result<Option<Product>> {
        self.products.update(id, request).await
    }

    async fn delete_product(&self, id: i64) -> Result<bool> {
        self.products.delete(id).await
    }

    async fn create_lesson(&self, request: CreateLessonRequest) -> Result<Lesson> {
        self.lessons.create(request).await
    }

    async fn find_lesson(&self, id: i64) -> Result<Option<Lesson>> {
        self.lessons.find_by_id(id).await
    }

    async fn list_lessons(&self, page: Page) -> Result<Vec<Lesson>> {
        self.lessons.list(page).await
    }

    async fn lessons_for_product(&self, product_id: i64) -> Result<Vec<Lesson>> {
        self.lessons.find_by_product(product_id).await
    }

    async fn count_lessons(&self, product_id: i64) -> Result<i64> {
        self.lessons.count_by_product(product_id).await
    }

    async fn find_group(&self, id: i64) -> Result<Option<GroupDetails>> {
        self.groups.find_by_id(id).await
    }

    async fn list_groups(&self, product_id: Option<i64>, page: Page) -> Result<Vec<GroupDetails>> {
        self.groups.list(product_id, page).await
    }

    async fn group_occupancy(&self, product_id: i64) -> Result<Vec<GroupOccupancy>> {
        self.groups.occupancy(product_id).await
    }

    async fn has_access(&self, user_id: i64, product_id: i64) -> Result<bool> {
        self.accesses.exists(user_id, product_id).await
    }

    async fn count_students(&self, product_id: i64) -> Result<i64> {
        self.accesses.count_distinct_users(product_id).await
    }

    async fn begin_enrollment(&self) -> Result<Box<dyn EnrollmentTx>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgEnrollment::new(tx)))
    }

    async fn health_check(&self) -> Result<()> {
        crate::database::connection::health_check(&self.pool).await
    }
}
