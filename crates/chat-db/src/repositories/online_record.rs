//! PostgreSQL implementation of OnlineRecordRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::entities::OnlineRecord;
use chat_core::traits::{OnlineRecordRepository, RepoResult};
use chat_core::value_objects::ObjectId;

use crate::models::OnlineRecordModel;

use super::error::map_db_error;

/// PostgreSQL implementation of OnlineRecordRepository
#[derive(Clone)]
pub struct PgOnlineRecordRepository {
    pool: PgPool,
}

impl PgOnlineRecordRepository {
    /// Create a new PgOnlineRecordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OnlineRecordRepository for PgOnlineRecordRepository {
    #[instrument(skip(self))]
    async fn last_online(&self, user_id: ObjectId) -> RepoResult<Option<OnlineRecord>> {
        let result = sqlx::query_as::<_, OnlineRecordModel>(
            r"
            SELECT id, user_id, created_at
            FROM online_records
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(user_id.to_hex())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(OnlineRecord::try_from).transpose()
    }

    #[instrument(skip(self), fields(user_id = %record.user_id))]
    async fn record(&self, record: &OnlineRecord) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO online_records (id, user_id, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(record.id.to_hex())
        .bind(record.user_id.to_hex())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
