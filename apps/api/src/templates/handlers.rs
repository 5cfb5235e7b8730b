use axum::{extract::Path, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::settings::{DocumentSettings, ResolvedSettings};
use crate::templates::registry::{defaults_for, TemplateInfo, CATALOG};
use crate::templates::resolver::resolve;

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<&'static TemplateInfo>> {
    Json(CATALOG.iter().collect())
}

/// GET /api/v1/templates/:id/defaults
pub async fn handle_template_defaults(
    Path(id): Path<String>,
) -> Result<Json<&'static ResolvedSettings>, AppError> {
    Ok(Json(defaults_for(&id)?))
}

#[derive(Deserialize)]
pub struct ResolveRequest {
    pub template: String,
    #[serde(default)]
    pub settings: DocumentSettings,
}

/// POST /api/v1/styles/resolve
///
/// Strict boundary: an unknown template id is a 404, unlike the render
/// endpoint's classic fallback.
pub async fn handle_resolve(
    Json(req): Json<ResolveRequest>,
) -> Result<Json<ResolvedSettings>, AppError> {
    Ok(Json(resolve(&req.template, &req.settings)?))
}
