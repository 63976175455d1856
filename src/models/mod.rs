//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod product;
pub mod lesson;
pub mod group;
pub mod access;
pub mod stats;
pub mod pagination;

// Re-export commonly used models
pub use user::{User, CreateUserRequest};
pub use product::{Product, CreateProductRequest, UpdateProductRequest, ProductResponse};
pub use lesson::{Lesson, CreateLessonRequest};
pub use group::{Group, GroupDetails, GroupOccupancy, GroupFilter};
pub use access::{Access, GrantAccessRequest, Enrollment};
pub use stats::ProductStats;
pub use pagination::{Page, Pagination};
