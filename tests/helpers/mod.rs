//! Test helpers module
//!
//! Utilities shared by the integration tests: an in-memory test context,
//! an optional PostgreSQL test database and catalog fixtures.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_context;
pub mod test_data;

pub use database_helper::*;
pub use test_context::*;
pub use test_data::*;
