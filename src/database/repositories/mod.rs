//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod product;
pub mod lesson;
pub mod group;
pub mod access;

// Re-export repositories
pub use user::UserRepository;
pub use product::ProductRepository;
pub use lesson::LessonRepository;
pub use group::GroupRepository;
pub use access::AccessRepository;
