//! Review Queries

use uuid::Uuid;

/// 获取一本书的所有书评
#[derive(Debug, Clone)]
pub struct ListBookReviews {
    pub book_id: Uuid,
}
