//! Presence service
//!
//! Answers "is this user online, or when were they last seen?" from the
//! live connection registry first and the persisted online records second.

use chat_core::{ObjectId, Presence};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Presence service
pub struct PresenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PresenceService<'a> {
    /// Create a new PresenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current presence of a user
    ///
    /// A live connection wins over any stored record. No record is
    /// `Presence::Unknown`, not an error.
    #[instrument(skip(self))]
    pub async fn online_state(&self, user_id: ObjectId) -> ServiceResult<Presence> {
        if self.ctx.presence_registry().is_online(user_id) {
            return Ok(Presence::Online);
        }

        let presence = self
            .ctx
            .online_record_repo()
            .last_online(user_id)
            .await?
            .map_or(Presence::Unknown, |record| Presence::LastSeen(record.created_at));

        Ok(presence)
    }
}
