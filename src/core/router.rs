use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};

use crate::features::chat::{routes as chat_routes, ChatService};
use crate::features::complaints::{routes as complaints_routes, ComplaintService};
use crate::features::offices::{routes as offices_routes, OfficeDirectory};
use crate::features::schedule::routes as schedule_routes;

/// Services shared with request handlers, built once at start-up
#[derive(Clone)]
pub struct AppServices {
    pub directory: Arc<OfficeDirectory>,
    pub complaints: Arc<ComplaintService>,
    pub chat: Arc<ChatService>,
}

/// Simple health check endpoint (no auth required)
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All API routes plus the health check, without docs or outer middleware
pub fn api_routes(services: &AppServices, max_body_size: usize) -> Router {
    Router::new()
        .merge(schedule_routes::routes())
        .merge(offices_routes::routes(Arc::clone(&services.directory)))
        .merge(complaints_routes::routes(Arc::clone(&services.complaints)))
        .merge(chat_routes::routes(Arc::clone(&services.chat)))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_body_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::create_test_pool;
    use crate::features::chat::services::IntentClassifier;
    use crate::features::complaints::SqliteComplaintStore;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> TestServer {
        let directory = Arc::new(OfficeDirectory::default());
        let store = SqliteComplaintStore::new(create_test_pool().await);
        let services = AppServices {
            directory: Arc::clone(&directory),
            complaints: Arc::new(ComplaintService::new(Arc::new(store))),
            chat: Arc::new(ChatService::new(IntentClassifier::default(), directory)),
        };
        TestServer::new(api_routes(&services, 1024 * 1024)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        server().await.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_schedule_endpoint_and_chat_reply_are_identical() {
        let server = server().await;

        let schedule: Value = server.get("/api/schedule").await.json();
        let chat: Value = server
            .post("/api/chat")
            .json(&json!({ "message": "¿Cuál es el horario?" }))
            .await
            .json();

        assert_eq!(schedule["response"], chat["response"]);
    }

    #[tokio::test]
    async fn test_complaint_ids_increase_across_requests() {
        let server = server().await;
        let payload = json!({ "reporterName": "Juan", "category": "violencia", "description": "x" });

        let first: Value = server.post("/api/complaints").json(&payload).await.json();
        let second: Value = server.post("/api/complaints").json(&payload).await.json();

        assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let directory = Arc::new(OfficeDirectory::default());
        let services = AppServices {
            directory: Arc::clone(&directory),
            complaints: Arc::new(ComplaintService::new(Arc::new(
                SqliteComplaintStore::new(create_test_pool().await),
            ))),
            chat: Arc::new(ChatService::new(IntentClassifier::default(), directory)),
        };
        let server = TestServer::new(api_routes(&services, 64)).unwrap();

        let response = server
            .post("/api/chat")
            .json(&json!({ "message": "horario ".repeat(100) }))
            .await;

        assert!(response.status_code().is_client_error());
    }
}
