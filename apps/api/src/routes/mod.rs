pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::render::handlers as render_handlers;
use crate::state::AppState;
use crate::styles::handlers as style_handlers;
use crate::templates::handlers as template_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route(
            "/api/v1/templates",
            get(template_handlers::handle_list_templates),
        )
        .route(
            "/api/v1/templates/:id/defaults",
            get(template_handlers::handle_template_defaults),
        )
        // Style resolution (strict boundary)
        .route(
            "/api/v1/styles/resolve",
            post(template_handlers::handle_resolve),
        )
        // Saved styles
        .route(
            "/api/v1/styles",
            get(style_handlers::handle_list_styles).post(style_handlers::handle_save_style),
        )
        .route(
            "/api/v1/styles/:timestamp",
            delete(style_handlers::handle_delete_style),
        )
        // Rendering (classic fallback boundary)
        .route("/api/v1/render", post(render_handlers::handle_render))
        .with_state(state)
}
