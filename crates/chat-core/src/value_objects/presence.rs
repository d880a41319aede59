//! Presence - a user's live or last known online state

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Result of a presence lookup. Never persisted.
///
/// Serializes to `true` when online, to the RFC 3339 timestamp of the last
/// online record, or to `null` when nothing is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Currently connected through at least one live socket
    Online,
    /// Not connected; last seen at the given time
    LastSeen(DateTime<Utc>),
    /// Not connected and no record exists
    #[default]
    Unknown,
}

impl Presence {
    #[inline]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }

    /// Timestamp of the last online record, if that is what we have
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::LastSeen(at) => Some(*at),
            _ => None,
        }
    }
}

impl Serialize for Presence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Online => serializer.serialize_bool(true),
            Self::LastSeen(at) => at.serialize(serializer),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}
