use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::offices::handlers;
use crate::features::offices::services::OfficeDirectory;

/// Create routes for the offices feature
pub fn routes(directory: Arc<OfficeDirectory>) -> Router {
    Router::new()
        .route("/api/offices", get(handlers::list_offices))
        .with_state(directory)
}
