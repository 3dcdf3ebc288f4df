//! Review Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReviewError;

/// 评论唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

/// 评论正文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment(String);

impl Comment {
    pub fn new(comment: impl Into<String>) -> Result<Self, ReviewError> {
        let comment = comment.into().trim().to_string();
        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }
        Ok(Self(comment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_validation() {
        assert_eq!(Comment::new(""), Err(ReviewError::EmptyComment));
        assert_eq!(Comment::new("  \n "), Err(ReviewError::EmptyComment));
        assert_eq!(Comment::new(" Great read ").unwrap().as_str(), "Great read");
        let long = "x".repeat(20_000);
        assert_eq!(Comment::new(long.clone()).unwrap().as_str(), long);
    }
}
