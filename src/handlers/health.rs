//! Health check endpoint

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use crate::handlers::AppState;
use crate::utils::errors::Result;

pub async fn health(State(state): State<AppState>) -> Result<Json<Value>> {
    state.services.health_check().await?;
    Ok(Json(json!({ "status": "ok", "version": crate::VERSION })))
}
