//! Caller identity
//!
//! Authentication happens upstream; the gateway forwards the authenticated
//! user id in the `X-User-Id` header and this extractor only reads it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::debug;
use crate::utils::errors::PlatformError;

/// Header carrying the authenticated user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Id of the user on whose behalf the request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub i64);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = PlatformError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| PlatformError::Authentication("Missing X-User-Id header".to_string()))?;

        let user_id = value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .ok_or_else(|| PlatformError::Authentication("Malformed X-User-Id header".to_string()))?;

        debug!(user_id = user_id, "Caller identified");
        Ok(CallerId(user_id))
    }
}
