//! Room database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for rooms table
#[derive(Debug, Clone, FromRow)]
pub struct RoomModel {
    pub id: String,
    pub member_ids: Vec<String>,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}
