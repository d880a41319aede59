//! Room entity - a direct-message room between two users

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::ObjectId;

/// Room type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// Two-member direct-message room
    Inbox,
}

impl RoomKind {
    /// Stored tag
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbox" => Ok(Self::Inbox),
            other => Err(DomainError::InvalidRoom(format!("unknown room type: {other}"))),
        }
    }
}

/// Exactly two member ids. Order is kept as given but ignored by equality.
#[derive(Debug, Clone, Copy, Eq, Serialize)]
pub struct RoomMembers([ObjectId; 2]);

impl RoomMembers {
    /// Build the member set for a pair of users
    pub const fn pair(a: ObjectId, b: ObjectId) -> Self {
        Self([a, b])
    }

    /// Member ids in insertion order
    #[inline]
    pub const fn ids(&self) -> [ObjectId; 2] {
        self.0
    }

    /// Member ids sorted, for order-independent comparison and storage lookups
    pub fn sorted(&self) -> [ObjectId; 2] {
        let [a, b] = self.0;
        if a <= b {
            [a, b]
        } else {
            [b, a]
        }
    }
}

impl PartialEq for RoomMembers {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl std::hash::Hash for RoomMembers {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl TryFrom<Vec<ObjectId>> for RoomMembers {
    type Error = DomainError;

    fn try_from(ids: Vec<ObjectId>) -> Result<Self, Self::Error> {
        match ids.as_slice() {
            [a, b] => Ok(Self::pair(*a, *b)),
            other => Err(DomainError::InvalidRoom(format!(
                "expected 2 members, got {}",
                other.len()
            ))),
        }
    }
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: ObjectId,
    pub members: RoomMembers,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub creator_id: ObjectId,
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Create a new inbox room between `creator_id` and `other_id`
    ///
    /// Members are stored as `[other_id, creator_id]`.
    pub fn inbox(id: ObjectId, other_id: ObjectId, creator_id: ObjectId) -> Self {
        Self {
            id,
            members: RoomMembers::pair(other_id, creator_id),
            kind: RoomKind::Inbox,
            creator_id,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_inbox(&self) -> bool {
        self.kind == RoomKind::Inbox
    }
}
