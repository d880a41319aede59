//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{OnlineRecord, Room, RoomMembers, User};
use crate::error::DomainError;
use crate::value_objects::ObjectId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username (exact match; normalization is the store's business)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find the inbox room whose member set is exactly `members`
    async fn find_inbox(&self, members: &RoomMembers) -> RepoResult<Option<Room>>;

    /// Create a new room
    ///
    /// No uniqueness is enforced on the member pair.
    async fn create(&self, room: &Room) -> RepoResult<()>;
}

// ============================================================================
// Online Record Repository
// ============================================================================

#[async_trait]
pub trait OnlineRecordRepository: Send + Sync {
    /// Newest online record for a user
    async fn last_online(&self, user_id: ObjectId) -> RepoResult<Option<OnlineRecord>>;

    /// Persist a new online record
    async fn record(&self, record: &OnlineRecord) -> RepoResult<()>;
}
