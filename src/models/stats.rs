//! Product statistics model

use serde::{Deserialize, Serialize};

/// Derived metrics for one product, computed on read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    pub product_id: i64,
    pub name: String,
    pub lessons_count: i64,
    pub students_count: i64,
    pub groups_count: i64,
    /// Mean group occupancy in percent, unrounded
    pub fill_percentage: f64,
    /// Share of all users who bought the product, in percent, unrounded
    pub purchase_percentage: f64,
}
