//! User entity - owned by the external user-management collaborator

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::ObjectId;

/// User account as seen by the page router (read only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: ObjectId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: ObjectId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            created_at: Utc::now(),
        }
    }
}
