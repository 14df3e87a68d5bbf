use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::complaints::handlers;
use crate::features::complaints::services::ComplaintService;

/// Create routes for the complaints feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route("/api/complaints", post(handlers::create_complaint))
        .with_state(service)
}
