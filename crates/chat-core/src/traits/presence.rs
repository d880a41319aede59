//! Live presence port

use crate::value_objects::ObjectId;

/// Registry of currently connected users.
///
/// Implementations are shared, in-process and cheap to query, so the check
/// is synchronous.
pub trait PresenceRegistry: Send + Sync {
    /// Whether the user has at least one live connection
    fn is_online(&self, user_id: ObjectId) -> bool;
}
