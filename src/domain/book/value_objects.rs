//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BookError;

/// 书籍唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 解析路径中的 ID，格式错误视为不存在
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, BookError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(BookError::EmptyTitle);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 作者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author(String);

impl Author {
    pub fn new(author: impl Into<String>) -> Result<Self, BookError> {
        let author = author.into().trim().to_string();
        if author.is_empty() {
            return Err(BookError::EmptyAuthor);
        }
        Ok(Self(author))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre(String);

impl Genre {
    pub fn new(genre: impl Into<String>) -> Result<Self, BookError> {
        let genre = genre.into().trim().to_string();
        if genre.is_empty() {
            return Err(BookError::EmptyGenre);
        }
        Ok(Self(genre))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 可选文本字段：空白视为未填写
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
