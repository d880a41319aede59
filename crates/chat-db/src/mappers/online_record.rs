//! Online record model -> entity mapper

use chat_core::{DomainError, OnlineRecord};

use crate::models::OnlineRecordModel;

use super::parse_id;

impl TryFrom<OnlineRecordModel> for OnlineRecord {
    type Error = DomainError;

    fn try_from(model: OnlineRecordModel) -> Result<Self, Self::Error> {
        Ok(OnlineRecord {
            id: parse_id("online_records.id", &model.id)?,
            user_id: parse_id("online_records.user_id", &model.user_id)?,
            created_at: model.created_at,
        })
    }
}
