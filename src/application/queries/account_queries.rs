//! Account Queries

use uuid::Uuid;

/// 获取当前登录用户
#[derive(Debug, Clone)]
pub struct GetCurrentUser {
    pub user_id: Uuid,
}
