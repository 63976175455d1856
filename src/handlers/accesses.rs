//! Access handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crate::handlers::AppState;
use crate::models::{Enrollment, GrantAccessRequest};
use crate::utils::errors::Result;

/// Record a purchase; the response carries the group the buyer was placed in
pub async fn grant_access(
    State(state): State<AppState>,
    Json(request): Json<GrantAccessRequest>,
) -> Result<(StatusCode, Json<Enrollment>)> {
    let enrollment = state.services.access_service.grant_access(request).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}
