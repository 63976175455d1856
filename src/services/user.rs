//! User service implementation
//!
//! Registers reference rows for externally managed identities.

use tracing::debug;
use crate::database::store::SharedStore;
use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::{PlatformError, Result};
use crate::utils::helpers::validate_name;
use crate::utils::logging;

/// User service for managing user references
#[derive(Clone)]
pub struct UserService {
    store: SharedStore,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Register a user reference
    pub async fn register_user(&self, mut request: CreateUserRequest) -> Result<User> {
        request.username = validate_name("Username", &request.username)?;

        let user = self.store.create_user(request).await?;
        logging::log_catalog_change("user", user.id, "registered");

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        debug!(user_id = user_id, "Getting user by ID");
        self.store
            .find_user(user_id)
            .await?
            .ok_or(PlatformError::UserNotFound { user_id })
    }
}
