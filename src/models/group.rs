//! Group model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A capacity-bounded cohort inside one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Group {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A group together with its member user ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDetails {
    #[serde(flatten)]
    pub group: Group,
    pub members: Vec<i64>,
}

/// A group and its current member count
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GroupOccupancy {
    #[sqlx(flatten)]
    pub group: Group,
    pub member_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupFilter {
    pub product_id: Option<i64>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
