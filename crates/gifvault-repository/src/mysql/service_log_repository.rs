//! MySQL service log repository implementation.

use crate::{pool::DatabasePool, traits::ServiceLogRepository};
use async_trait::async_trait;
use gifvault_core::{GifVaultResult, ServiceLog};
use sqlx::types::Json;
use std::sync::Arc;
use tracing::debug;

/// MySQL append-only service log repository.
pub struct MySqlServiceLogRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlServiceLogRepository {
    /// Creates a new MySQL service log repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceLogRepository for MySqlServiceLogRepository {
    async fn save(&self, log: &ServiceLog) -> GifVaultResult<()> {
        debug!("Persisting service log for '{}'", log.service);

        sqlx::query(
            r#"
            INSERT INTO service_logs
                (user_id, service, request_body, response_status, response_body,
                 ip_address, duration, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(log.user_id.map(gifvault_core::UserId::into_inner))
        .bind(&log.service)
        .bind(Json(&log.request_body))
        .bind(i32::from(log.response_status))
        .bind(Json(&log.response_body))
        .bind(&log.ip_address)
        .bind(&log.duration)
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }
}
