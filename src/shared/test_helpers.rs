#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::complaints::dtos::CreateComplaintDto;
#[cfg(test)]
use crate::features::complaints::models::{Complaint, NewComplaint};
#[cfg(test)]
use crate::features::complaints::ComplaintStore;
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::sync::Mutex;

/// Minimal valid complaint request
#[cfg(test)]
pub fn complaint_dto() -> CreateComplaintDto {
    CreateComplaintDto {
        reporter_name: Some("Juan".to_string()),
        category: Some("violencia".to_string()),
        description: Some("x".to_string()),
        ..Default::default()
    }
}

/// Complaint store that keeps records in a vector
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryComplaintStore {
    records: Mutex<Vec<Complaint>>,
}

#[cfg(test)]
impl InMemoryComplaintStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl ComplaintStore for InMemoryComplaintStore {
    async fn insert(&self, complaint: NewComplaint) -> Result<Complaint> {
        let mut records = self.records.lock().unwrap();
        let stored = Complaint {
            id: records.len() as i64 + 1,
            reporter_name: complaint.reporter_name,
            national_id: complaint.national_id,
            phone: complaint.phone,
            region: complaint.region,
            category: complaint.category,
            description: complaint.description,
            created_at: chrono::Utc::now(),
        };
        records.push(stored.clone());
        Ok(stored)
    }
}

/// Complaint store whose backing database is always unavailable
#[cfg(test)]
pub struct FailingComplaintStore;

#[cfg(test)]
#[async_trait]
impl ComplaintStore for FailingComplaintStore {
    async fn insert(&self, _complaint: NewComplaint) -> Result<Complaint> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
}
