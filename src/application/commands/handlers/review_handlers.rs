//! Review Command Handlers

use std::sync::Arc;

use crate::application::commands::AddReview;
use crate::application::error::{ApplicationError, Validator};
use crate::application::ports::{
    BookRepositoryPort, RepositoryError, ReviewRecord, ReviewRepositoryPort,
};
use crate::domain::account::UserId;
use crate::domain::book::BookId;
use crate::domain::rating::Rating;
use crate::domain::review::{Comment, Review, ReviewError};

/// AddReview Handler
pub struct AddReviewHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    review_repo: Arc<dyn ReviewRepositoryPort>,
}

impl AddReviewHandler {
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        review_repo: Arc<dyn ReviewRepositoryPort>,
    ) -> Self {
        Self {
            book_repo,
            review_repo,
        }
    }

    /// 校验先于存在性检查：非法输入总是 400，即使书籍不存在
    pub async fn handle(&self, command: AddReview) -> Result<ReviewRecord, ApplicationError> {
        let mut v = Validator::new();
        let fields = (
            v.check(Rating::from_json(&command.rating).map_err(ReviewError::from)),
            v.check(Comment::new(command.comment.unwrap_or_default())),
        );
        let (Some(rating), Some(comment)) = fields else {
            return Err(v.into_error());
        };

        self.book_repo
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book"))?;

        let review = Review::new(
            BookId::from_uuid(command.book_id),
            UserId::from_uuid(command.reviewer.id),
            rating,
            comment,
        );
        let record = ReviewRecord::from_review(&review, Some(command.reviewer.username));

        match self.review_repo.save(&record).await {
            Ok(()) => {}
            // 并发删除：检查之后书籍已被删掉
            Err(RepositoryError::NotFound(_)) => return Err(ApplicationError::not_found("Book")),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            review_id = %record.id,
            book_id = %record.book_id,
            reviewer = %record.reviewer_id,
            rating = %record.rating,
            "Review added"
        );

        Ok(record)
    }
}
