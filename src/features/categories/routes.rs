use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// The static `/list` segment takes precedence over the `{id}` capture.
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::get_category).post(handlers::create_category),
        )
        .route("/api/categories/list", get(handlers::list_categories))
        .route(
            "/api/categories/{id}",
            patch(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(service)
}
