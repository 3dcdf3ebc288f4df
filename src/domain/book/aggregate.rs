//! Book Context - Aggregate Root

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::{optional_text, Author, BookError, BookId, Genre, Title};
use crate::domain::account::UserId;

/// Book 聚合根
///
/// 不变量:
/// - title / author / genre 非空
/// - owner 在创建后不可变，只有 owner 可以删除
/// - 删除 Book 时级联删除其所有 Review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: Title,
    author: Author,
    genre: Genre,
    description: Option<String>,
    image_url: Option<String>,
    owner: UserId,
    created_at: DateTime<Utc>,
}

impl Book {
    /// 创建新书籍
    pub fn new(
        title: Title,
        author: Author,
        genre: Genre,
        description: Option<String>,
        image_url: Option<String>,
        owner: UserId,
    ) -> Self {
        Self {
            id: BookId::new(),
            title,
            author,
            genre,
            description: optional_text(description),
            image_url: optional_text(image_url),
            owner,
            // 存储精度为微秒
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    // Getters
    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn genre(&self) -> &Genre {
        &self.genre
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// 只有创建者可以删除书籍
pub fn ensure_owner(owner: &UserId, requester: &UserId) -> Result<(), BookError> {
    if owner != requester {
        return Err(BookError::NotOwner);
    }
    Ok(())
}
