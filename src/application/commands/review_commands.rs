//! Review Commands

use uuid::Uuid;

use crate::application::ports::AuthUser;

/// 添加书评命令
#[derive(Debug, Clone)]
pub struct AddReview {
    pub book_id: Uuid,
    pub reviewer: AuthUser,
    /// 原始 JSON 值，校验时才解析为 Rating
    pub rating: serde_json::Value,
    pub comment: Option<String>,
}
