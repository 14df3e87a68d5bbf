use utoipa::{Modify, OpenApi};

use crate::features::chat::{dtos as chat_dtos, handlers as chat_handlers, models as chat_models};
use crate::features::complaints::{dtos as complaints_dtos, handlers as complaints_handlers};
use crate::features::offices::{dtos as offices_dtos, handlers as offices_handlers};
use crate::features::schedule::handlers as schedule_handlers;
use crate::shared::types::{ErrorResponse, ResponseStatus, TextResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        schedule_handlers::get_schedule,
        offices_handlers::list_offices,
        complaints_handlers::create_complaint,
        chat_handlers::chat,
    ),
    components(
        schemas(
            // Shared
            ResponseStatus,
            TextResponse,
            ErrorResponse,
            // Offices
            offices_dtos::OfficeResponseDto,
            offices_dtos::OfficeListResponseDto,
            // Complaints
            complaints_dtos::CreateComplaintDto,
            complaints_dtos::CreateComplaintResponseDto,
            // Chat
            chat_models::Intent,
            chat_dtos::ChatRequestDto,
            chat_dtos::ChatResponseDto,
        )
    ),
    tags(
        (name = "schedule", description = "Office hours"),
        (name = "offices", description = "PGN office locations"),
        (name = "complaints", description = "Preliminary complaint intake (public)"),
        (name = "chat", description = "Keyword-based chat router"),
    ),
    info(
        title = "Chatbot PGN – API",
        version = "0.1.0",
        description = "API del Chatbot PGN (horarios, sedes y denuncias).",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
