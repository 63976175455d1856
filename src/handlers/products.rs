//! Product handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use crate::handlers::AppState;
use crate::models::{CreateProductRequest, Pagination, ProductResponse, UpdateProductRequest};
use crate::utils::errors::Result;

pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<ProductResponse>>> {
    Ok(Json(state.services.product_service.list_products(&pagination).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let product = state.services.product_service.create_product(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(State(state): State<AppState>, Path(product_id): Path<i64>) -> Result<Json<ProductResponse>> {
    Ok(Json(state.services.product_service.get_product(product_id).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    Ok(Json(state.services.product_service.update_product(product_id, request).await?))
}

pub async fn delete_product(State(state): State<AppState>, Path(product_id): Path<i64>) -> Result<StatusCode> {
    state.services.product_service.delete_product(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
