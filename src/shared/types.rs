use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome marker carried by every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Response body for simple text replies
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TextResponse {
    pub status: ResponseStatus,
    pub response: String,
}

impl TextResponse {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            response: response.into(),
        }
    }
}

/// Response body for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: String, errors: Option<Vec<String>>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message,
            errors,
        }
    }
}
