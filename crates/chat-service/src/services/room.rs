//! Room service
//!
//! Resolves the direct-message ("inbox") room between the requester and a
//! user named in the URL, creating it on first contact.

use chat_core::entities::{Room, RoomMembers};
use chat_core::ObjectId;
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Room service
pub struct RoomService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomService<'a> {
    /// Create a new RoomService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find the inbox room shared by `username` and `me`, or create it.
    ///
    /// Returns `Ok(None)` when no user has that username. Sequential calls
    /// return the same room. Two concurrent first contacts can each miss the
    /// lookup and create a room; lookups then return the oldest one.
    #[instrument(skip(self), fields(me = %me))]
    pub async fn find_or_create_inbox(
        &self,
        username: &str,
        me: ObjectId,
    ) -> ServiceResult<Option<Room>> {
        let Some(other) = self.ctx.user_repo().find_by_username(username).await? else {
            debug!("No user with that username");
            return Ok(None);
        };

        let members = RoomMembers::pair(other.id, me);
        if let Some(existing) = self.ctx.room_repo().find_inbox(&members).await? {
            debug!(room_id = %existing.id, "Found existing inbox room");
            return Ok(Some(existing));
        }

        let room = Room::inbox(self.ctx.generate_id(), other.id, me);
        self.ctx.room_repo().create(&room).await?;

        info!(
            room_id = %room.id,
            creator_id = %me,
            other_id = %other.id,
            "Inbox room created"
        );

        Ok(Some(room))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chat_core::traits::{RepoResult, RoomRepository};
    use chat_core::RoomKind;
    use chat_db::InMemoryRoomRepository;
    use tokio::sync::Barrier;

    use super::*;
    use crate::services::test_support::TestHarness;

    #[tokio::test]
    async fn test_unknown_username_resolves_to_none() {
        let harness = TestHarness::new();
        let me = harness.add_user("me").await;
        let ctx = harness.context();

        let room = RoomService::new(&ctx)
            .find_or_create_inbox("doesNotExist", me.id)
            .await
            .unwrap();

        assert!(room.is_none());
        assert!(harness.rooms.is_empty());
    }

    #[tokio::test]
    async fn test_first_contact_creates_inbox() {
        let harness = TestHarness::new();
        let me = harness.add_user("me").await;
        let alice = harness.add_user("alice").await;
        let ctx = harness.context();

        let room = RoomService::new(&ctx)
            .find_or_create_inbox("alice", me.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(room.kind, RoomKind::Inbox);
        assert_eq!(room.creator_id, me.id);
        assert_eq!(room.members, RoomMembers::pair(me.id, alice.id));
        assert_eq!(harness.rooms.len(), 1);
    }

    #[tokio::test]
    async fn test_existing_room_is_reused() {
        let harness = TestHarness::new();
        let me = harness.add_user("me").await;
        let alice = harness.add_user("alice").await;
        let existing = Room::inbox(harness.ids.generate(), me.id, alice.id);
        harness.rooms.create(&existing).await.unwrap();
        let ctx = harness.context();

        let room = RoomService::new(&ctx)
            .find_or_create_inbox("alice", me.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(room.id, existing.id);
        assert_eq!(harness.rooms.len(), 1);
    }

    #[tokio::test]
    async fn test_sequential_resolves_are_idempotent() {
        let harness = TestHarness::new();
        let me = harness.add_user("me").await;
        harness.add_user("alice").await;
        let ctx = harness.context();
        let service = RoomService::new(&ctx);

        let first = service.find_or_create_inbox("alice", me.id).await.unwrap();
        let second = service.find_or_create_inbox("alice", me.id).await.unwrap();

        assert_eq!(first.map(|r| r.id), second.map(|r| r.id));
        assert_eq!(harness.rooms.len(), 1);
    }

    #[tokio::test]
    async fn test_other_side_sees_the_same_room() {
        let harness = TestHarness::new();
        let me = harness.add_user("me").await;
        let alice = harness.add_user("alice").await;
        let ctx = harness.context();
        let service = RoomService::new(&ctx);

        let mine = service.find_or_create_inbox("alice", me.id).await.unwrap().unwrap();
        let hers = service.find_or_create_inbox("me", alice.id).await.unwrap().unwrap();

        assert_eq!(mine.id, hers.id);
    }

    #[tokio::test]
    async fn test_self_contact_creates_self_room() {
        let harness = TestHarness::new();
        let me = harness.add_user("me").await;
        harness.add_user("alice").await;
        let ctx = harness.context();
        let service = RoomService::new(&ctx);

        service.find_or_create_inbox("alice", me.id).await.unwrap();
        let own = service.find_or_create_inbox("me", me.id).await.unwrap().unwrap();

        assert_eq!(own.members, RoomMembers::pair(me.id, me.id));
        assert_eq!(harness.rooms.len(), 2);
    }

    /// Holds every lookup until `parties` callers have looked up.
    struct LockstepRooms {
        inner: Arc<InMemoryRoomRepository>,
        barrier: Barrier,
    }

    #[async_trait]
    impl RoomRepository for LockstepRooms {
        async fn find_inbox(&self, members: &RoomMembers) -> RepoResult<Option<Room>> {
            let found = self.inner.find_inbox(members).await;
            self.barrier.wait().await;
            found
        }

        async fn create(&self, room: &Room) -> RepoResult<()> {
            self.inner.create(room).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_first_contact_can_create_two_rooms() {
        let harness = TestHarness::new();
        let me = harness.add_user("me").await;
        let alice = harness.add_user("alice").await;
        let rooms = Arc::new(LockstepRooms {
            inner: harness.rooms.clone(),
            barrier: Barrier::new(2),
        });
        let ctx = harness.context_with_rooms(rooms);

        let service = RoomService::new(&ctx);
        let (a, b) = tokio::join!(
            service.find_or_create_inbox("alice", me.id),
            service.find_or_create_inbox("me", alice.id),
        );
        let (a, b) = (a.unwrap().unwrap(), b.unwrap().unwrap());

        assert_ne!(a.id, b.id);
        let duplicates = harness.rooms.inboxes_for(&RoomMembers::pair(me.id, alice.id));
        assert_eq!(duplicates.len(), 2);
    }
}
