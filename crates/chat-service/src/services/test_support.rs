//! Shared fixtures for the service tests

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chat_common::auth::JwtService;
use chat_core::traits::{OnlineRecordRepository, PresenceRegistry, RoomRepository, UserRepository};
use chat_core::{ObjectId, ObjectIdGenerator, User};
use chat_db::{InMemoryOnlineRecordRepository, InMemoryRoomRepository, InMemoryUserRepository};

use super::context::{ServiceContext, ServiceContextBuilder};

/// Presence registry with a fixed set of online users
#[derive(Debug, Default)]
pub struct StaticPresence {
    online: Mutex<HashSet<ObjectId>>,
}

impl StaticPresence {
    pub fn set_online(&self, user_id: ObjectId) {
        if let Ok(mut online) = self.online.lock() {
            online.insert(user_id);
        }
    }
}

impl PresenceRegistry for StaticPresence {
    fn is_online(&self, user_id: ObjectId) -> bool {
        self.online
            .lock()
            .map(|online| online.contains(&user_id))
            .unwrap_or(false)
    }
}

pub struct TestHarness {
    pub users: Arc<InMemoryUserRepository>,
    pub rooms: Arc<InMemoryRoomRepository>,
    pub records: Arc<InMemoryOnlineRecordRepository>,
    pub presence: Arc<StaticPresence>,
    pub ids: Arc<ObjectIdGenerator>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            rooms: Arc::new(InMemoryRoomRepository::new()),
            records: Arc::new(InMemoryOnlineRecordRepository::new()),
            presence: Arc::new(StaticPresence::default()),
            ids: Arc::new(ObjectIdGenerator::new()),
        }
    }

    /// Context over the harness stores
    pub fn context(&self) -> ServiceContext {
        self.context_with_rooms(self.rooms.clone())
    }

    /// Context with a custom room repository
    pub fn context_with_rooms(&self, rooms: Arc<dyn RoomRepository>) -> ServiceContext {
        let users: Arc<dyn UserRepository> = self.users.clone();
        let records: Arc<dyn OnlineRecordRepository> = self.records.clone();
        let presence: Arc<dyn PresenceRegistry> = self.presence.clone();
        ServiceContextBuilder::new()
            .user_repo(users)
            .room_repo(rooms)
            .online_record_repo(records)
            .presence_registry(presence)
            .jwt_service(Arc::new(JwtService::new("service-test-secret", 900)))
            .id_generator(self.ids.clone())
            .build()
            .expect("complete context")
    }

    pub async fn add_user(&self, username: &str) -> User {
        let user = User::new(self.ids.generate(), username);
        self.users.create(&user).await.expect("insert user");
        user
    }
}
