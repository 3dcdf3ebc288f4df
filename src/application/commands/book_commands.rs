//! Book Commands

use uuid::Uuid;

/// 创建书籍命令
///
/// 必填字段保持 Option，缺失与空白都由校验统一报告
#[derive(Debug, Clone, Default)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: Uuid,
}

/// 删除书籍命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: Uuid,
    pub requester_id: Uuid,
}
