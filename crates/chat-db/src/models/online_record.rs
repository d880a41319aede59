//! Online record database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for online_records table
#[derive(Debug, Clone, FromRow)]
pub struct OnlineRecordModel {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
