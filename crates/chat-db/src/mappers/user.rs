//! User model -> entity mapper

use chat_core::{DomainError, User};

use crate::models::UserModel;

use super::parse_id;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: parse_id("users.id", &model.id)?,
            username: model.username,
            created_at: model.created_at,
        })
    }
}
