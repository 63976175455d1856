//! Product model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A purchasable course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub start_datetime: DateTime<Utc>,
    pub cost: Decimal,
    pub creator_id: i64,
    pub min_users_in_group: i32,
    /// Group capacity; a group with this many members is full
    pub max_users_in_group: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub start_datetime: DateTime<Utc>,
    pub cost: Decimal,
    pub creator_id: i64,
    pub min_users_in_group: Option<i32>,
    pub max_users_in_group: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub start_datetime: Option<DateTime<Utc>>,
    pub cost: Option<Decimal>,
    pub min_users_in_group: Option<i32>,
    pub max_users_in_group: Option<i32>,
}

/// Product as returned to API callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub lessons_count: i64,
}

impl UpdateProductRequest {
    /// The product as it would look after this update
    pub fn apply_to(&self, product: &Product) -> Product {
        Product {
            name: self.name.clone().unwrap_or_else(|| product.name.clone()),
            start_datetime: self.start_datetime.unwrap_or(product.start_datetime),
            cost: self.cost.unwrap_or(product.cost),
            min_users_in_group: self.min_users_in_group.unwrap_or(product.min_users_in_group),
            max_users_in_group: self.max_users_in_group.unwrap_or(product.max_users_in_group),
            ..product.clone()
        }
    }
}
