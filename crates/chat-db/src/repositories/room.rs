//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::entities::{Room, RoomKind, RoomMembers};
use chat_core::traits::{RepoResult, RoomRepository};

use crate::mappers::member_ids_param;
use crate::models::RoomModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    /// Exact set match: both arrays contain each other and hold two entries.
    /// If a creation race left duplicates behind, the oldest room wins.
    #[instrument(skip(self))]
    async fn find_inbox(&self, members: &RoomMembers) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, member_ids, type, creator_id, created_at
            FROM rooms
            WHERE type = $2
              AND cardinality(member_ids) = 2
              AND member_ids @> $1::TEXT[]
              AND member_ids <@ $1::TEXT[]
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            ",
        )
        .bind(member_ids_param(members))
        .bind(RoomKind::Inbox.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Room::try_from).transpose()
    }

    #[instrument(skip(self), fields(room_id = %room.id))]
    async fn create(&self, room: &Room) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO rooms (id, member_ids, type, creator_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(room.id.to_hex())
        .bind(member_ids_param(&room.members))
        .bind(room.kind.as_str())
        .bind(room.creator_id.to_hex())
        .bind(room.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
