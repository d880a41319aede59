//! Room model -> entity mapper

use chat_core::{DomainError, Room, RoomMembers};

use crate::models::RoomModel;

use super::parse_id;

impl TryFrom<RoomModel> for Room {
    type Error = DomainError;

    fn try_from(model: RoomModel) -> Result<Self, Self::Error> {
        let member_ids = model
            .member_ids
            .iter()
            .map(|raw| parse_id("rooms.member_ids", raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Room {
            id: parse_id("rooms.id", &model.id)?,
            members: RoomMembers::try_from(member_ids)?,
            kind: model.kind.parse()?,
            creator_id: parse_id("rooms.creator_id", &model.creator_id)?,
            created_at: model.created_at,
        })
    }
}

/// Members as a `TEXT[]` bind parameter, in stored order
pub fn member_ids_param(members: &RoomMembers) -> Vec<String> {
    members.ids().iter().map(|id| id.to_hex()).collect()
}
