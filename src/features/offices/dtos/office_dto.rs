use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::offices::models::OfficeLocation;
use crate::shared::types::ResponseStatus;

/// Query parameters for listing offices
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OfficeQuery {
    /// Department name (case-insensitive, exact match)
    #[param(example = "Guatemala")]
    pub region: Option<String>,
}

/// Response DTO for a single office
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfficeResponseDto {
    pub region: String,
    pub site_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<OfficeLocation> for OfficeResponseDto {
    fn from(office: OfficeLocation) -> Self {
        Self {
            region: office.region,
            site_name: office.site_name,
            address: office.address,
            phone: office.phone,
            hours: office.hours,
            latitude: office.latitude,
            longitude: office.longitude,
        }
    }
}

/// Response body for the office listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfficeListResponseDto {
    pub status: ResponseStatus,
    pub offices: Vec<OfficeResponseDto>,
}
