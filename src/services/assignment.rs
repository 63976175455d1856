//! Group assignment
//!
//! Places a user who just bought a product into one of the product's groups.
//! The least-filled group that still has room wins; when every group is full,
//! or the product has none yet, a new group is opened for the user.
//!
//! `min_users_in_group` plays no part here: a freshly opened group may stay
//! below the product minimum indefinitely.

use tracing::debug;
use crate::database::store::EnrollmentTx;
use crate::models::{Access, Group, GroupOccupancy, Product};
use crate::utils::errors::Result;
use crate::utils::logging;

/// Name given to groups opened by the assignment
pub fn new_group_name(product: &Product) -> String {
    format!("New group for {}", product.name)
}

/// Pick the group with the fewest members among those below `capacity`.
///
/// A group is full once `member_count >= capacity`. Ties go to the earliest
/// group in `groups`.
pub fn pick_group(groups: &[GroupOccupancy], capacity: i32) -> Option<&GroupOccupancy> {
    groups
        .iter()
        .filter(|g| g.member_count < i64::from(capacity))
        .min_by_key(|g| g.member_count)
}

/// Put the access holder into a group of the purchased product.
///
/// Must run inside the enrollment that created `access`, after `product` was
/// locked through the same `tx`. A user who already belongs to one of the
/// product's groups stays where they are.
pub async fn assign_user_to_group(tx: &mut dyn EnrollmentTx, product: &Product, access: &Access) -> Result<Group> {
    if let Some(group) = tx.group_of_member(product.id, access.user_id).await? {
        debug!(
            user_id = access.user_id,
            product_id = product.id,
            group_id = group.id,
            "User already belongs to a group of this product"
        );
        return Ok(group);
    }

    let occupancy = tx.group_occupancy(product.id).await?;
    let (group, created) = match pick_group(&occupancy, product.max_users_in_group) {
        Some(slot) => (slot.group.clone(), false),
        None => (tx.create_group(product.id, &new_group_name(product)).await?, true),
    };

    tx.add_member(group.id, access.user_id).await?;
    logging::log_enrollment(access.user_id, product.id, group.id, created);

    Ok(group)
}
