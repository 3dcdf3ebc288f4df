//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::book::Book;
use crate::domain::rating::{Rating, RatingSummary};
use crate::domain::review::Review;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Book Repository
// ============================================================================

/// 书籍实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub added_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: *book.id().as_uuid(),
            title: book.title().as_str().to_string(),
            author: book.author().as_str().to_string(),
            genre: book.genre().as_str().to_string(),
            description: book.description().map(str::to_string),
            image_url: book.image_url().map(str::to_string),
            added_by: *book.owner().as_uuid(),
            created_at: book.created_at(),
        }
    }
}

/// 列表过滤条件（大小写不敏感的子串匹配）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub genre: Option<String>,
    pub author: Option<String>,
}

impl BookFilter {
    /// 空字符串视为不过滤
    pub fn new(genre: Option<String>, author: Option<String>) -> Self {
        let normalize = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            genre: normalize(genre),
            author: normalize(author),
        }
    }
}

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 保存书籍
    async fn save(&self, book: &BookRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找书籍
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, RepositoryError>;

    /// 分页查询，按创建时间倒序
    async fn find_page(
        &self,
        filter: &BookFilter,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<BookRecord>, RepositoryError>;

    /// 统计满足过滤条件的书籍数
    async fn count(&self, filter: &BookFilter) -> Result<u64, RepositoryError>;

    /// 在同一事务中删除书籍及其所有书评
    ///
    /// 返回被删除的书评数量；书籍不存在时返回 NotFound
    async fn delete_with_reviews(&self, id: Uuid) -> Result<u64, RepositoryError>;
}

// ============================================================================
// Review Repository
// ============================================================================

/// 书评实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub book_id: Uuid,
    pub reviewer_id: Uuid,
    /// 读取时通过 users 表关联得到，写入时忽略
    pub reviewer_username: Option<String>,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn from_review(review: &Review, reviewer_username: Option<String>) -> Self {
        Self {
            id: *review.id().as_uuid(),
            book_id: *review.book_id().as_uuid(),
            reviewer_id: *review.reviewer().as_uuid(),
            reviewer_username,
            rating: review.rating(),
            comment: review.comment().as_str().to_string(),
            created_at: review.created_at(),
        }
    }
}

/// Review Repository Port
#[async_trait]
pub trait ReviewRepositoryPort: Send + Sync {
    /// 保存书评
    async fn save(&self, review: &ReviewRecord) -> Result<(), RepositoryError>;

    /// 获取一本书的所有书评（带评论者用户名），按创建时间倒序
    async fn find_by_book(&self, book_id: Uuid) -> Result<Vec<ReviewRecord>, RepositoryError>;

    /// 批量汇总多本书的评分（SUM / COUNT）
    ///
    /// 没有书评的书不会出现在结果中
    async fn summarize_by_books(
        &self,
        book_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, RatingSummary>, RepositoryError>;
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 新建用户；用户名或邮箱重复时返回 Duplicate
    async fn insert(&self, user: &UserRecord) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;
}
