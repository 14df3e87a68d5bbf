use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::complaints::dtos::CreateComplaintDto;
use crate::features::complaints::models::{Complaint, NewComplaint};
use crate::features::complaints::store::ComplaintStore;

/// Service for recording preliminary complaints
pub struct ComplaintService {
    store: Arc<dyn ComplaintStore>,
}

impl ComplaintService {
    pub fn new(store: Arc<dyn ComplaintStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a complaint.
    ///
    /// Fails with `AppError::Validation` when a required field is missing or
    /// a field exceeds its column limit; nothing is written in that case.
    pub async fn create(&self, dto: CreateComplaintDto) -> Result<Complaint> {
        dto.validate()?;

        let complaint = NewComplaint::try_from(dto)?;
        let stored = self.store.insert(complaint).await?;

        tracing::info!(
            "Complaint created: id={}, category={}, region={:?}",
            stored.id,
            stored.category,
            stored.region
        );

        Ok(stored)
    }
}

impl TryFrom<CreateComplaintDto> for NewComplaint {
    type Error = AppError;

    /// Requires a DTO that already passed `validate()`; a missing required
    /// field is still reported rather than panicking.
    fn try_from(dto: CreateComplaintDto) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            reporter_name: required(dto.reporter_name, "reporterName")?,
            national_id: dto.national_id,
            phone: dto.phone,
            region: dto.region,
            category: required(dto.category, "category")?,
            description: required(dto.description, "description")?,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| AppError::Validation(vec![format!("{} is required", field)]))
}
