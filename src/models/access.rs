//! Access model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use super::group::Group;

/// A purchase: `user_id` is entitled to `product_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Access {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantAccessRequest {
    pub user_id: i64,
    pub product_id: i64,
}

/// Outcome of a purchase: the stored access and the group the user ended up in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub access: Access,
    pub group: Group,
}
