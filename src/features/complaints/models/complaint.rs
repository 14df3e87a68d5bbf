use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a stored complaint
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Complaint {
    pub id: i64,
    pub reporter_name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub category: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A validated complaint that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewComplaint {
    pub reporter_name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub category: String,
    pub description: String,
}
