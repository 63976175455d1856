//! Lesson handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use crate::handlers::AppState;
use crate::middleware::CallerId;
use crate::models::{CreateLessonRequest, Lesson, Pagination};
use crate::utils::errors::Result;

pub async fn list_lessons(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Lesson>>> {
    Ok(Json(state.services.lesson_service.list_lessons(&pagination).await?))
}

pub async fn create_lesson(
    State(state): State<AppState>,
    Json(request): Json<CreateLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>)> {
    let lesson = state.services.lesson_service.create_lesson(request).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

pub async fn get_lesson(State(state): State<AppState>, Path(lesson_id): Path<i64>) -> Result<Json<Lesson>> {
    Ok(Json(state.services.lesson_service.get_lesson(lesson_id).await?))
}

/// Lessons of a product, only for callers who bought it
pub async fn product_lessons(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<Lesson>>> {
    let lessons = state
        .services
        .lesson_service
        .lessons_for_user(user_id, product_id)
        .await?;
    Ok(Json(lessons))
}
