use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::chat::dtos::{ChatRequestDto, ChatResponseDto};
use crate::features::chat::services::ChatService;
use crate::shared::types::ErrorResponse;

/// Send a chat message
///
/// The message is classified by keyword into schedule, location or complaint
/// intents and answered with the matching reply.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Chat reply", body = ChatResponseDto),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Missing or non-string message", body = ErrorResponse)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(service): State<Arc<ChatService>>,
    AppJson(dto): AppJson<ChatRequestDto>,
) -> Result<Json<ChatResponseDto>> {
    let reply = service.reply(&dto.message);
    Ok(Json(reply.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::chat::routes;
    use crate::features::chat::services::IntentClassifier;
    use crate::features::offices::OfficeDirectory;
    use crate::shared::constants::OFFICIAL_SCHEDULE;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let service = ChatService::new(
            IntentClassifier::default(),
            Arc::new(OfficeDirectory::default()),
        );
        TestServer::new(routes::routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_chat_schedule() {
        let response = server()
            .post("/api/chat")
            .json(&json!({ "message": "¿Cuál es el horario?" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "status": "ok",
            "intentDetected": "schedule_inquiry",
            "response": OFFICIAL_SCHEDULE
        }));
    }

    #[tokio::test]
    async fn test_chat_locations_reports_count() {
        let response = server()
            .post("/api/chat")
            .json(&json!({ "message": "Quiero ver las sedes" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["intentDetected"], "location_inquiry");
        assert!(body["response"].as_str().unwrap().contains('3'));
    }

    #[tokio::test]
    async fn test_chat_unknown() {
        let response = server()
            .post("/api/chat")
            .json(&json!({ "message": "Hola" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["intentDetected"], "unknown");
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_unprocessable() {
        let response = server().post("/api/chat").json(&json!({})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_chat_empty_message_is_unknown() {
        let response = server()
            .post("/api/chat")
            .json(&json!({ "message": "" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["intentDetected"], "unknown");
    }

    #[tokio::test]
    async fn test_chat_long_message_is_still_classified() {
        let message = format!("horario {}", "x".repeat(10000));
        let response = server()
            .post("/api/chat")
            .json(&json!({ "message": message }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["intentDetected"], "schedule_inquiry");
        assert_eq!(body["response"], OFFICIAL_SCHEDULE);
    }

    #[tokio::test]
    async fn test_chat_non_string_message_is_unprocessable() {
        let response = server()
            .post("/api/chat")
            .json(&json!({ "message": 42 }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
