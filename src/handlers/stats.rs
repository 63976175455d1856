//! Product statistics handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use crate::handlers::AppState;
use crate::models::{Pagination, ProductStats};
use crate::utils::errors::Result;

pub async fn list_product_stats(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<ProductStats>>> {
    Ok(Json(state.services.statistics_service.all_product_stats(&pagination).await?))
}

pub async fn get_product_stats(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductStats>> {
    Ok(Json(state.services.statistics_service.product_stats(product_id).await?))
}
