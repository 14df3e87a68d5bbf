use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::chat::models::Intent;
use crate::features::chat::services::ChatReply;
use crate::shared::types::ResponseStatus;

/// Request DTO for sending a chat message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequestDto {
    /// The user's message; any string is accepted, including an empty one
    #[schema(example = "¿Cuál es el horario?")]
    pub message: String,
}

/// Response DTO for a chat reply
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseDto {
    pub status: ResponseStatus,
    pub intent_detected: Intent,
    pub response: String,
}

impl From<ChatReply> for ChatResponseDto {
    fn from(reply: ChatReply) -> Self {
        Self {
            status: ResponseStatus::Ok,
            intent_detected: reply.intent,
            response: reply.response,
        }
    }
}
