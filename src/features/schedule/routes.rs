use axum::{routing::get, Router};

use crate::features::schedule::handlers;

/// Create routes for the schedule feature
pub fn routes() -> Router {
    Router::new().route("/api/schedule", get(handlers::get_schedule))
}
