use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::types::ResponseStatus;

/// Request DTO for submitting a complaint
///
/// Required fields are modelled as `Option` so that a missing field surfaces
/// as a validation error naming the field instead of a generic parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintDto {
    /// Full name of the person reporting (required)
    #[validate(
        required(message = "reporterName is required"),
        length(max = 120, message = "reporterName must not exceed 120 characters")
    )]
    #[schema(example = "Juan Pérez")]
    pub reporter_name: Option<String>,

    /// National identity document number (DPI)
    #[validate(length(max = 30, message = "nationalId must not exceed 30 characters"))]
    #[schema(example = "1234567890101")]
    pub national_id: Option<String>,

    #[validate(length(max = 30, message = "phone must not exceed 30 characters"))]
    #[schema(example = "5555-5555")]
    pub phone: Option<String>,

    /// Department where the events happened
    #[validate(length(max = 60, message = "region must not exceed 60 characters"))]
    #[schema(example = "Guatemala")]
    pub region: Option<String>,

    /// Kind of complaint, e.g. "violencia" (required)
    #[validate(
        required(message = "category is required"),
        length(max = 80, message = "category must not exceed 80 characters")
    )]
    #[schema(example = "violencia")]
    pub category: Option<String>,

    /// What happened (required)
    #[validate(required(message = "description is required"))]
    #[schema(example = "Descripción breve...")]
    pub description: Option<String>,
}

/// Response DTO after a complaint is stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateComplaintResponseDto {
    pub status: ResponseStatus,
    pub id: i64,
    pub message: String,
}
