//! Review Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookRepositoryPort, ReviewRecord, ReviewRepositoryPort};
use crate::application::queries::ListBookReviews;

/// ListBookReviews Handler
pub struct ListBookReviewsHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    review_repo: Arc<dyn ReviewRepositoryPort>,
}

impl ListBookReviewsHandler {
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        review_repo: Arc<dyn ReviewRepositoryPort>,
    ) -> Self {
        Self {
            book_repo,
            review_repo,
        }
    }

    pub async fn handle(&self, query: ListBookReviews) -> Result<Vec<ReviewRecord>, ApplicationError> {
        // 验证书籍存在
        self.book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book"))?;

        Ok(self.review_repo.find_by_book(query.book_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContext;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_reviews_newest_first() {
        let ctx = TestContext::new().await;
        let u1 = ctx.create_user("u1").await;
        let u2 = ctx.create_user("u2").await;
        let book = ctx.create_book(&u1, "Dune", "Herbert", "Sci-Fi").await;
        ctx.add_review(book.id, &u1, 2).await;
        ctx.add_review(book.id, &u2, 5).await;

        let handler = ListBookReviewsHandler::new(ctx.book_repo.clone(), ctx.review_repo.clone());
        let reviews = handler
            .handle(ListBookReviews { book_id: book.id })
            .await
            .unwrap();

        let ratings: Vec<_> = reviews.iter().map(|r| r.rating.value()).collect();
        assert_eq!(ratings, vec![5, 2]);
        assert_eq!(reviews[0].reviewer_username.as_deref(), Some("u2"));
    }

    #[tokio::test]
    async fn test_reviews_of_missing_book() {
        let ctx = TestContext::new().await;
        let handler = ListBookReviewsHandler::new(ctx.book_repo.clone(), ctx.review_repo.clone());

        let result = handler
            .handle(ListBookReviews {
                book_id: Uuid::new_v4(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
