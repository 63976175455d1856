//! User handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crate::handlers::AppState;
use crate::models::{CreateUserRequest, User};
use crate::utils::errors::Result;

pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.services.user_service.register_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(State(state): State<AppState>, Path(user_id): Path<i64>) -> Result<Json<User>> {
    Ok(Json(state.services.user_service.get_user(user_id).await?))
}
