//! Room identifier validation port

use crate::value_objects::ObjectId;

/// Decides whether a path segment is a room identifier or something else
/// (a username).
pub trait RoomIdValidator: Send + Sync {
    fn is_room_id(&self, candidate: &str) -> bool;
}

/// Accepts 24-character hex ObjectIds
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectIdValidator;

impl RoomIdValidator for ObjectIdValidator {
    fn is_room_id(&self, candidate: &str) -> bool {
        ObjectId::is_valid(candidate)
    }
}
