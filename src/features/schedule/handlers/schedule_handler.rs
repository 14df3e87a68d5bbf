use axum::Json;

use crate::shared::constants::OFFICIAL_SCHEDULE;
use crate::shared::types::TextResponse;

/// Get the official office hours
#[utoipa::path(
    get,
    path = "/api/schedule",
    responses(
        (status = 200, description = "Office hours", body = TextResponse),
    ),
    tag = "schedule"
)]
pub async fn get_schedule() -> Json<TextResponse> {
    Json(TextResponse::ok(OFFICIAL_SCHEDULE))
}
