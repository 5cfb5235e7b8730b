use axum::Json;
use serde::Deserialize;

use crate::models::resume::Resume;
use crate::render::page_tree::{render_page, PageTree};

#[derive(Deserialize)]
pub struct RenderRequest {
    /// Template id; missing or unrecognized ids render as classic so a
    /// resume always produces a document.
    pub template: Option<String>,
    pub resume: Resume,
}

/// POST /api/v1/render
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Json<PageTree> {
    let template = req.template.as_deref().unwrap_or("classic");
    Json(render_page(template, &req.resume))
}
