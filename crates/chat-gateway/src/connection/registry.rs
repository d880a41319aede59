//! Connection registry
//!
//! Live sessions per user, shared between the socket gateway (writer) and the
//! presence lookups (reader).

use std::collections::HashSet;
use std::sync::Arc;

use chat_core::traits::PresenceRegistry;
use chat_core::ObjectId;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// User ID to live session IDs
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    sessions: DashMap<ObjectId, HashSet<String>>,
}

impl ConnectionRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Add a session for a user.
    ///
    /// Returns `true` if this is the user's first live session.
    pub fn register(&self, user_id: ObjectId, session_id: &str) -> bool {
        let mut sessions = self.sessions.entry(user_id).or_default();
        let first = sessions.is_empty();
        sessions.insert(session_id.to_string());

        tracing::debug!(user_id = %user_id, session_id = %session_id, "Session registered");
        first
    }

    /// Remove a session.
    ///
    /// Returns `true` if it was the user's last live session. The user's entry
    /// is dropped in the same step, so a concurrent `register` either lands
    /// before (and this returns `false`) or starts a fresh entry.
    pub fn unregister(&self, user_id: ObjectId, session_id: &str) -> bool {
        match self.sessions.entry(user_id) {
            Entry::Occupied(mut entry) => {
                if !entry.get_mut().remove(session_id) {
                    return false;
                }
                tracing::debug!(user_id = %user_id, session_id = %session_id, "Session unregistered");
                if entry.get().is_empty() {
                    entry.remove();
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(_) => false,
        }
    }

    /// Number of live sessions for a user
    pub fn session_count(&self, user_id: ObjectId) -> usize {
        self.sessions.get(&user_id).map_or(0, |s| s.len())
    }

    /// Number of users with at least one live session
    pub fn online_users(&self) -> usize {
        self.sessions.len()
    }
}

impl PresenceRegistry for ConnectionRegistry {
    fn is_online(&self, user_id: ObjectId) -> bool {
        self.sessions.contains_key(&user_id)
    }
}
