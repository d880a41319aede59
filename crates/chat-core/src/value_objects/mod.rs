//! Value objects - immutable types that represent domain concepts

mod object_id;
mod presence;

pub use object_id::{ObjectId, ObjectIdGenerator, ObjectIdParseError};
pub use presence::Presence;
