//! Store contract
//!
//! Business logic talks to persistence only through these traits. The
//! PostgreSQL implementation lives in [`crate::database::service`], the
//! in-process one in [`crate::database::memory`].

use std::sync::Arc;
use async_trait::async_trait;
use crate::models::*;
use crate::utils::errors::Result;

/// Shared handle to whichever store backs the service
pub type SharedStore = Arc<dyn Store>;

/// Typed query and command methods over products, lessons, groups, accesses and users
#[async_trait]
pub trait Store: Send + Sync {
    // Users
    async fn create_user(&self, request: CreateUserRequest) -> Result<User>;
    async fn find_user(&self, id: i64) -> Result<Option<User>>;
    async fn count_users(&self) -> Result<i64>;

    // Products
    async fn create_product(&self, request: CreateProductRequest) -> Result<Product>;
    async fn find_product(&self, id: i64) -> Result<Option<Product>>;
    async fn list_products(&self, page: Page) -> Result<Vec<Product>>;
    /// Returns `None` when the product does not exist
    async fn update_product(&self, id: i64, request: UpdateProductRequest) -> Result<Option<Product>>;
    /// Returns whether a product was deleted
    async fn delete_product(&self, id: i64) -> Result<bool>;

    // Lessons
    async fn create_lesson(&self, request: CreateLessonRequest) -> Result<Lesson>;
    async fn find_lesson(&self, id: i64) -> Result<Option<Lesson>>;
    async fn list_lessons(&self, page: Page) -> Result<Vec<Lesson>>;
    /// Lessons of one product, ordered by id
    async fn lessons_for_product(&self, product_id: i64) -> Result<Vec<Lesson>>;
    async fn count_lessons(&self, product_id: i64) -> Result<i64>;

    // Groups
    async fn find_group(&self, id: i64) -> Result<Option<GroupDetails>>;
    async fn list_groups(&self, product_id: Option<i64>, page: Page) -> Result<Vec<GroupDetails>>;
    /// Groups of one product with their member counts, ordered by group id
    async fn group_occupancy(&self, product_id: i64) -> Result<Vec<GroupOccupancy>>;

    // Accesses
    async fn has_access(&self, user_id: i64, product_id: i64) -> Result<bool>;
    /// Distinct users holding an access to the product
    async fn count_students(&self, product_id: i64) -> Result<i64>;

    /// Open a unit of work for recording a purchase and assigning its group
    async fn begin_enrollment(&self) -> Result<Box<dyn EnrollmentTx>>;

    async fn health_check(&self) -> Result<()>;
}

/// Unit of work for a single purchase.
///
/// Every read and write goes through one transaction. `lock_product` takes an
/// exclusive lock on the product, so concurrent enrollments into the same
/// product run one after another. Dropping the transaction without calling
/// [`EnrollmentTx::commit`] discards all of its writes.
#[async_trait]
pub trait EnrollmentTx: Send {
    /// Load and lock the product; `None` when it does not exist
    async fn lock_product(&mut self, product_id: i64) -> Result<Option<Product>>;
    async fn user_exists(&mut self, user_id: i64) -> Result<bool>;
    async fn insert_access(&mut self, request: &GrantAccessRequest) -> Result<Access>;
    /// The product group the user already belongs to, if any
    async fn group_of_member(&mut self, product_id: i64, user_id: i64) -> Result<Option<Group>>;
    /// Groups of one product with their member counts, ordered by group id
    async fn group_occupancy(&mut self, product_id: i64) -> Result<Vec<GroupOccupancy>>;
    async fn create_group(&mut self, product_id: i64, name: &str) -> Result<Group>;
    async fn add_member(&mut self, group_id: i64, user_id: i64) -> Result<()>;
    async fn commit(self: Box<Self>) -> Result<()>;
}
