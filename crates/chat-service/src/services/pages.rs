//! Page service
//!
//! Decides which page each request renders. Unauthenticated traffic is
//! "redirected" by rendering a different page than the one requested.

use chat_core::ObjectId;
use tracing::{debug, instrument};

use crate::dto::{paths, Page, PageData};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::presence::PresenceService;
use super::room::RoomService;

/// Page service
pub struct PageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PageService<'a> {
    /// Create a new PageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Render `path` for a signed-in user, `unauth_path` otherwise
    pub fn gate(path: &str, session: Option<ObjectId>, unauth_path: &str) -> Page {
        match session {
            Some(_) => Page::new(path),
            None => Page::new(unauth_path),
        }
    }

    /// Page for `/chat/<room_param>`
    ///
    /// A segment that is not a room id is treated as a username and resolved
    /// to the shared inbox room. When that yields nothing, or the segment
    /// already is a room id, the requested path is rendered with the
    /// requester's own presence.
    #[instrument(skip(self))]
    pub async fn chat_room(
        &self,
        room_param: &str,
        session: Option<ObjectId>,
    ) -> ServiceResult<Page> {
        let Some(me) = session else {
            return Ok(Page::new(paths::LOGIN));
        };

        if !self.ctx.room_id_validator().is_room_id(room_param) {
            let room = RoomService::new(self.ctx)
                .find_or_create_inbox(room_param, me)
                .await?;
            if let Some(room) = room {
                debug!(room_id = %room.id, "Username resolved to inbox room");
                return Ok(Page::new(paths::chat_room(room.id)));
            }
        }

        // Requester's own presence, not the other member's
        let online = PresenceService::new(self.ctx).online_state(me).await?;
        Ok(Page::with_data(
            paths::chat_room(room_param),
            PageData { online },
        ))
    }
}
