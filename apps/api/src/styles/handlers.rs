use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::settings::{DocumentSettings, SavedStyle};
use crate::state::AppState;

/// GET /api/v1/styles
pub async fn handle_list_styles(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedStyle>>, AppError> {
    let mut store = state.styles.lock().await;
    let styles = store.load_all().map_err(AppError::Storage)?;
    Ok(Json(styles))
}

#[derive(Deserialize)]
pub struct SaveStyleRequest {
    pub name: String,
    pub settings: DocumentSettings,
}

/// POST /api/v1/styles
pub async fn handle_save_style(
    State(state): State<AppState>,
    Json(req): Json<SaveStyleRequest>,
) -> Result<(StatusCode, Json<SavedStyle>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("style name must not be empty".to_string()));
    }
    let mut store = state.styles.lock().await;
    let saved = store
        .save(&req.name, req.settings)
        .map_err(AppError::Storage)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/v1/styles/:timestamp — idempotent, 204 either way.
pub async fn handle_delete_style(
    State(state): State<AppState>,
    Path(timestamp): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.styles.lock().await;
    store.delete(timestamp).map_err(AppError::Storage)?;
    Ok(StatusCode::NO_CONTENT)
}
