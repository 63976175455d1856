//! Access service implementation
//!
//! Recording a purchase and placing the buyer into a group happen in one
//! enrollment transaction. The product row is locked first, so two purchases
//! of the same product cannot both see the same free seat.

use tracing::info;
use crate::database::store::SharedStore;
use crate::models::access::{Enrollment, GrantAccessRequest};
use crate::services::assignment::assign_user_to_group;
use crate::utils::errors::{PlatformError, Result};

#[derive(Clone)]
pub struct AccessService {
    store: SharedStore,
}

impl AccessService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Record a purchase and assign the buyer to a group of the product
    pub async fn grant_access(&self, request: GrantAccessRequest) -> Result<Enrollment> {
        let mut tx = self.store.begin_enrollment().await?;

        let product = tx
            .lock_product(request.product_id)
            .await?
            .ok_or(PlatformError::ProductNotFound { product_id: request.product_id })?;
        if !tx.user_exists(request.user_id).await? {
            return Err(PlatformError::UserNotFound { user_id: request.user_id });
        }

        let access = tx.insert_access(&request).await?;
        let group = assign_user_to_group(tx.as_mut(), &product, &access).await?;
        tx.commit().await?;

        info!(
            access_id = access.id,
            user_id = access.user_id,
            product_id = access.product_id,
            group_id = group.id,
            "Access granted"
        );

        Ok(Enrollment { access, group })
    }
}
