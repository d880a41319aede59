//! Domain entities - core business objects

mod online_record;
mod room;
mod user;

pub use online_record::OnlineRecord;
pub use room::{Room, RoomKind, RoomMembers};
pub use user::User;
