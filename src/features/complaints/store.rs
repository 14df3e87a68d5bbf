use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::{Complaint, NewComplaint};

/// Persistence seam for complaints.
///
/// Implementations assign `id` and `created_at` and must have committed the
/// record before returning it.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    async fn insert(&self, complaint: NewComplaint) -> Result<Complaint>;
}

/// Complaint store backed by the `complaints` SQLite table
pub struct SqliteComplaintStore {
    pool: SqlitePool,
}

impl SqliteComplaintStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintStore for SqliteComplaintStore {
    async fn insert(&self, complaint: NewComplaint) -> Result<Complaint> {
        let stored = sqlx::query_as::<_, Complaint>(
            r#"
            INSERT INTO complaints
                (reporter_name, national_id, phone, region, category, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id, reporter_name, national_id, phone, region, category, description, created_at
            "#,
        )
        .bind(complaint.reporter_name)
        .bind(complaint.national_id)
        .bind(complaint.phone)
        .bind(complaint.region)
        .bind(complaint.category)
        .bind(complaint.description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert complaint: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::create_test_pool;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn new_complaint(reporter_name: String) -> NewComplaint {
        NewComplaint {
            reporter_name,
            national_id: None,
            phone: Some("5555-5555".to_string()),
            region: Some("Guatemala".to_string()),
            category: "violencia".to_string(),
            description: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_returns_server_assigned_fields() {
        let store = SqliteComplaintStore::new(create_test_pool().await);
        let name: String = Name().fake();
        let before = Utc::now();

        let stored = store.insert(new_complaint(name.clone())).await.unwrap();

        assert!(stored.id >= 1);
        assert_eq!(stored.reporter_name, name);
        assert_eq!(stored.national_id, None);
        assert_eq!(stored.phone.as_deref(), Some("5555-5555"));
        assert_eq!(stored.category, "violencia");
        let elapsed = stored.created_at.signed_duration_since(before);
        assert!(elapsed.num_seconds().abs() < 5);
    }

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let store = SqliteComplaintStore::new(create_test_pool().await);

        let first = store.insert(new_complaint(Name().fake())).await.unwrap();
        let second = store.insert(new_complaint(Name().fake())).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_insert_is_persisted() {
        let pool = create_test_pool().await;
        let store = SqliteComplaintStore::new(pool.clone());

        let stored = store
            .insert(new_complaint("Juan".to_string()))
            .await
            .unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM complaints WHERE id = ?1")
            .bind(stored.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_database_error() {
        let pool = create_test_pool().await;
        pool.close().await;
        let store = SqliteComplaintStore::new(pool);

        let result = store.insert(new_complaint("Juan".to_string())).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
