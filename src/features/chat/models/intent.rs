use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Purpose of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ScheduleInquiry,
    LocationInquiry,
    ComplaintIntake,
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::ScheduleInquiry => write!(f, "schedule_inquiry"),
            Intent::LocationInquiry => write!(f, "location_inquiry"),
            Intent::ComplaintIntake => write!(f, "complaint_intake"),
            Intent::Unknown => write!(f, "unknown"),
        }
    }
}
