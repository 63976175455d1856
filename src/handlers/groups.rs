//! Group handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use crate::handlers::AppState;
use crate::models::{GroupDetails, GroupFilter};
use crate::utils::errors::Result;

pub async fn list_groups(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> Result<Json<Vec<GroupDetails>>> {
    Ok(Json(state.services.group_service.list_groups(&filter).await?))
}

pub async fn get_group(State(state): State<AppState>, Path(group_id): Path<i64>) -> Result<Json<GroupDetails>> {
    Ok(Json(state.services.group_service.get_group(group_id).await?))
}
