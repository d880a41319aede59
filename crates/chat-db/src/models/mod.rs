//! Database models - SQLx-compatible structs for PostgreSQL tables

mod online_record;
mod room;
mod user;

pub use online_record::OnlineRecordModel;
pub use room::RoomModel;
pub use user::UserModel;
