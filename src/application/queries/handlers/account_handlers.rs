//! Account Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{UserRecord, UserRepositoryPort};
use crate::application::queries::GetCurrentUser;

/// 用户资料（不含密码哈希）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
        }
    }
}

/// GetCurrentUser Handler
pub struct GetCurrentUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetCurrentUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetCurrentUser) -> Result<UserProfile, ApplicationError> {
        let user = self
            .user_repo
            .find_by_id(query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User"))?;

        Ok(UserProfile::from(user))
    }
}
