//! OnlineRecord entity - persisted "was online" marker

use chrono::{DateTime, Utc};

use crate::value_objects::ObjectId;

/// Marker written when a user's last live connection closes.
/// The newest record for a user is that user's last known online time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlineRecord {
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub created_at: DateTime<Utc>,
}

impl OnlineRecord {
    /// Create a record stamped with the current time
    pub fn new(id: ObjectId, user_id: ObjectId) -> Self {
        Self {
            id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
