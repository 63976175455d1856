//! Group repository implementation

use std::collections::HashMap;
use sqlx::{PgExecutor, PgPool};
use crate::models::group::{Group, GroupDetails, GroupOccupancy};
use crate::models::pagination::Page;
use crate::utils::errors::PlatformError;

#[derive(Clone, Debug)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find group by ID, with its members
    pub async fn find_by_id(&self, id: i64) -> Result<Option<GroupDetails>, PlatformError> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT id, product_id, name, created_at FROM groups WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match group {
            Some(group) => {
                let mut members = self.members_by_group(&[group.id]).await?;
                let members = members.remove(&group.id).unwrap_or_default();
                Ok(Some(GroupDetails { group, members }))
            }
            None => Ok(None),
        }
    }

    /// List groups, optionally restricted to one product, with their members
    pub async fn list(&self, product_id: Option<i64>, page: Page) -> Result<Vec<GroupDetails>, PlatformError> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, product_id, name, created_at
            FROM groups
            WHERE ($1::BIGINT IS NULL OR product_id = $1)
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(product_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
        let mut members = self.members_by_group(&ids).await?;

        Ok(groups
            .into_iter()
            .map(|group| {
                let members = members.remove(&group.id).unwrap_or_default();
                GroupDetails { group, members }
            })
            .collect())
    }

    /// Groups of a product with member counts
    pub async fn occupancy(&self, product_id: i64) -> Result<Vec<GroupOccupancy>, PlatformError> {
        fetch_occupancy(&self.pool, product_id).await
    }

    /// Member user IDs keyed by group ID
    async fn members_by_group(&self, group_ids: &[i64]) -> Result<HashMap<i64, Vec<i64>>, PlatformError> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT group_id, user_id FROM group_members WHERE group_id = ANY($1) ORDER BY joined_at ASC, user_id ASC"
        )
        .bind(group_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut members: HashMap<i64, Vec<i64>> = HashMap::new();
        for (group_id, user_id) in rows {
            members.entry(group_id).or_default().push(user_id);
        }

        Ok(members)
    }
}

/// Groups of a product with member counts, ordered by group ID
pub(crate) async fn fetch_occupancy<'e, E>(executor: E, product_id: i64) -> Result<Vec<GroupOccupancy>, PlatformError>
where
    E: PgExecutor<'e>,
{
    let groups = sqlx::query_as::<_, GroupOccupancy>(
        r#"
        SELECT g.id, g.product_id, g.name, g.created_at, COUNT(gm.user_id) AS member_count
        FROM groups g
        LEFT JOIN group_members gm ON gm.group_id = g.id
        WHERE g.product_id = $1
        GROUP BY g.id
        ORDER BY g.id ASC
        "#
    )
    .bind(product_id)
    .fetch_all(executor)
    .await?;

    Ok(groups)
}
