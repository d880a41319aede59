//! Model to entity mappers
//!
//! Ids are stored as 24-char hex text, so conversions are fallible:
//! `TryFrom<Model> for Entity` surfaces malformed rows as `DomainError::InvalidId`.

mod online_record;
mod room;
mod user;

pub use room::member_ids_param;

use chat_core::{DomainError, ObjectId};

/// Parse a stored id column
pub(crate) fn parse_id(column: &'static str, raw: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse(raw).map_err(|e| DomainError::InvalidId(format!("{column}={raw}: {e}")))
}
