//! In-memory repositories
//!
//! `DashMap`-backed implementations of the repository ports. They follow the
//! same semantics as the PostgreSQL versions (exact member-set matching, no
//! uniqueness on room pairs, newest online record wins) and are used by the
//! service and HTTP test suites.

use async_trait::async_trait;
use dashmap::DashMap;

use chat_core::entities::{OnlineRecord, Room, RoomMembers, User};
use chat_core::error::DomainError;
use chat_core::traits::{OnlineRecordRepository, RepoResult, RoomRepository, UserRepository};
use chat_core::value_objects::ObjectId;

// ============================================================================
// Users
// ============================================================================

/// In-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<ObjectId, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.value().clone()))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        if self.users.iter().any(|entry| entry.username == user.username) {
            return Err(DomainError::UsernameTaken(user.username.clone()));
        }
        self.users.insert(user.id, user.clone());
        Ok(())
    }
}

// ============================================================================
// Rooms
// ============================================================================

/// In-memory room store
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: DashMap<ObjectId, Room>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All inbox rooms for a member pair, oldest first
    pub fn inboxes_for(&self, members: &RoomMembers) -> Vec<Room> {
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|entry| entry.is_inbox() && entry.members == *members)
            .map(|entry| entry.value().clone())
            .collect();
        rooms.sort_by_key(|room| (room.created_at, room.id));
        rooms
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_inbox(&self, members: &RoomMembers) -> RepoResult<Option<Room>> {
        Ok(self.inboxes_for(members).into_iter().next())
    }

    async fn create(&self, room: &Room) -> RepoResult<()> {
        self.rooms.insert(room.id, room.clone());
        Ok(())
    }
}

// ============================================================================
// Online records
// ============================================================================

/// In-memory online record store
#[derive(Debug, Default)]
pub struct InMemoryOnlineRecordRepository {
    records: DashMap<ObjectId, Vec<OnlineRecord>>,
}

impl InMemoryOnlineRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored for a user
    pub fn count_for(&self, user_id: ObjectId) -> usize {
        self.records.get(&user_id).map_or(0, |r| r.len())
    }
}

#[async_trait]
impl OnlineRecordRepository for InMemoryOnlineRecordRepository {
    async fn last_online(&self, user_id: ObjectId) -> RepoResult<Option<OnlineRecord>> {
        Ok(self.records.get(&user_id).and_then(|records| {
            records
                .iter()
                .max_by_key(|record| (record.created_at, record.id))
                .cloned()
        }))
    }

    async fn record(&self, record: &OnlineRecord) -> RepoResult<()> {
        self.records
            .entry(record.user_id)
            .or_default()
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn id(n: u8) -> ObjectId {
        ObjectId::from_bytes([n; 12])
    }

    #[tokio::test]
    async fn test_user_lookup_by_username() {
        let repo = InMemoryUserRepository::new();
        repo.create(&User::new(id(1), "alice")).await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, id(1));
        assert!(repo.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&User::new(id(1), "alice")).await.unwrap();

        let err = repo.create(&User::new(id(2), "alice")).await.unwrap_err();
        assert!(matches!(err, DomainError::UsernameTaken(_)));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_inbox_matches_unordered_pair() {
        let repo = InMemoryRoomRepository::new();
        let room = Room::inbox(id(10), id(1), id(2));
        repo.create(&room).await.unwrap();

        let found = repo
            .find_inbox(&RoomMembers::pair(id(2), id(1)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, id(10));
        assert!(repo
            .find_inbox(&RoomMembers::pair(id(1), id(3)))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_self_pair_does_not_match_other_rooms() {
        let repo = InMemoryRoomRepository::new();
        repo.create(&Room::inbox(id(10), id(1), id(2))).await.unwrap();

        assert!(repo
            .find_inbox(&RoomMembers::pair(id(1), id(1)))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_inbox_prefers_oldest_duplicate() {
        let repo = InMemoryRoomRepository::new();
        let mut older = Room::inbox(id(20), id(1), id(2));
        older.created_at = Utc::now() - Duration::minutes(5);
        repo.create(&Room::inbox(id(10), id(1), id(2))).await.unwrap();
        repo.create(&older).await.unwrap();

        let found = repo
            .find_inbox(&RoomMembers::pair(id(1), id(2)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, id(20));
    }

    #[tokio::test]
    async fn test_last_online_returns_newest() {
        let repo = InMemoryOnlineRecordRepository::new();
        let mut old = OnlineRecord::new(id(30), id(1));
        old.created_at = Utc::now() - Duration::hours(2);
        let new = OnlineRecord::new(id(31), id(1));

        repo.record(&new).await.unwrap();
        repo.record(&old).await.unwrap();

        let last = repo.last_online(id(1)).await.unwrap().unwrap();
        assert_eq!(last.id, id(31));
        assert_eq!(repo.count_for(id(1)), 2);
        assert!(repo.last_online(id(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_last_online_same_instant_prefers_larger_id() {
        let repo = InMemoryOnlineRecordRepository::new();
        let at = Utc::now();
        let mut low = OnlineRecord::new(id(40), id(1));
        low.created_at = at;
        let mut high = OnlineRecord::new(id(41), id(1));
        high.created_at = at;

        repo.record(&high).await.unwrap();
        repo.record(&low).await.unwrap();

        let last = repo.last_online(id(1)).await.unwrap().unwrap();
        assert_eq!(last.id, id(41));
    }
}
