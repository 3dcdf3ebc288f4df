//! Review Context - Entity

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, ReviewId};
use crate::domain::account::UserId;
use crate::domain::book::BookId;
use crate::domain::rating::Rating;

/// 书评
///
/// 不变量:
/// - rating ∈ [1, 5]
/// - comment 非空
/// - 不可编辑，只随所属 Book 一起删除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    book_id: BookId,
    reviewer: UserId,
    rating: Rating,
    comment: Comment,
    created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(book_id: BookId, reviewer: UserId, rating: Rating, comment: Comment) -> Self {
        Self {
            id: ReviewId::new(),
            book_id,
            reviewer,
            rating,
            comment,
            // 存储精度为微秒
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn id(&self) -> &ReviewId {
        &self.id
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    pub fn reviewer(&self) -> &UserId {
        &self.reviewer
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
