//! Book Queries

use uuid::Uuid;

/// 获取书籍详情查询（含书评与平均分）
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: Uuid,
}

/// 分页列出书籍查询
///
/// 分页参数保留原始字符串，解析失败时回退到默认值
#[derive(Debug, Clone, Default)]
pub struct ListBooks {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub genre: Option<String>,
    pub author: Option<String>,
}
