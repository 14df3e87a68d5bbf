use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::complaints::dtos::{CreateComplaintDto, CreateComplaintResponseDto};
use crate::features::complaints::services::ComplaintService;
use crate::shared::constants::COMPLAINT_CONFIRMATION;
use crate::shared::types::{ErrorResponse, ResponseStatus};

/// Submit a preliminary complaint
///
/// Public endpoint. The complaint is stored for later review by a PGN operator.
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 200, description = "Complaint recorded", body = CreateComplaintResponseDto),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "complaints"
)]
pub async fn create_complaint(
    State(service): State<Arc<ComplaintService>>,
    AppJson(dto): AppJson<CreateComplaintDto>,
) -> Result<Json<CreateComplaintResponseDto>> {
    let complaint = service.create(dto).await?;

    Ok(Json(CreateComplaintResponseDto {
        status: ResponseStatus::Ok,
        id: complaint.id,
        message: COMPLAINT_CONFIRMATION.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::create_test_pool;
    use crate::features::complaints::{routes, SqliteComplaintStore};
    use crate::shared::test_helpers::{FailingComplaintStore, InMemoryComplaintStore};
    use axum::body::Bytes;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server_with(service: ComplaintService) -> TestServer {
        TestServer::new(routes::routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_complaint_persists_to_sqlite() {
        let store = SqliteComplaintStore::new(create_test_pool().await);
        let server = server_with(ComplaintService::new(Arc::new(store)));

        let response = server
            .post("/api/complaints")
            .json(&json!({
                "reporterName": "Juan Pérez",
                "nationalId": "1234567890101",
                "phone": "5555-5555",
                "region": "Guatemala",
                "category": "violencia",
                "description": "Descripción breve..."
            }))
            .await;

        response.assert_status_ok();
        let body: CreateComplaintResponseDto = response.json();
        assert_eq!(body.status, ResponseStatus::Ok);
        assert!(body.id >= 1);
        assert_eq!(body.message, COMPLAINT_CONFIRMATION);
    }

    #[tokio::test]
    async fn test_missing_reporter_name_is_unprocessable() {
        let store = Arc::new(InMemoryComplaintStore::default());
        let server = server_with(ComplaintService::new(store.clone()));

        let response = server
            .post("/api/complaints")
            .json(&json!({ "category": "violencia", "description": "x" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["status"], "error");
        assert_eq!(body["errors"], json!(["reporterName is required"]));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_unprocessable() {
        let server = server_with(ComplaintService::new(Arc::new(
            InMemoryComplaintStore::default(),
        )));

        let response = server
            .post("/api/complaints")
            .json(&json!({ "reporterName": 42, "category": "violencia", "description": "x" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let server = server_with(ComplaintService::new(Arc::new(
            InMemoryComplaintStore::default(),
        )));

        let response = server
            .post("/api/complaints")
            .bytes(Bytes::from_static(b"{\"reporterName\": "))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_storage_failure_is_server_error() {
        let server = server_with(ComplaintService::new(Arc::new(FailingComplaintStore)));

        let response = server
            .post("/api/complaints")
            .json(&json!({ "reporterName": "Juan", "category": "violencia", "description": "x" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Database error occurred");
    }
}
