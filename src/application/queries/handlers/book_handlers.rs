//! Book Query Handlers
//!
//! 平均分在这里作为显式的查询期聚合步骤计算，
//! 详情和列表共用 `RatingSummary::average`

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    BookFilter, BookRecord, BookRepositoryPort, ReviewRecord, ReviewRepositoryPort,
};
use crate::application::queries::{GetBook, ListBooks};
use crate::domain::pagination::PageRequest;
use crate::domain::rating::RatingSummary;

// ============================================================================
// Response DTOs
// ============================================================================

/// 列表项：书籍 + 平均分
#[derive(Debug, Clone)]
pub struct BookListItem {
    pub book: BookRecord,
    pub average_rating: f64,
}

/// 一页书籍
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<BookListItem>,
    pub current_page: u32,
    pub total_pages: u64,
    pub total_books: u64,
}

/// 书籍详情
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: BookRecord,
    pub reviews: Vec<ReviewRecord>,
    pub average_rating: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    review_repo: Arc<dyn ReviewRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        review_repo: Arc<dyn ReviewRepositoryPort>,
    ) -> Self {
        Self {
            book_repo,
            review_repo,
        }
    }

    pub async fn handle(&self, query: GetBook) -> Result<BookDetail, ApplicationError> {
        let book = self
            .book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book"))?;

        let reviews = self.review_repo.find_by_book(query.book_id).await?;
        let summary = RatingSummary::from_ratings(reviews.iter().map(|r| r.rating));

        Ok(BookDetail {
            book,
            reviews,
            average_rating: summary.average(),
        })
    }
}

/// ListBooks Handler - 分页 + 过滤 + 平均分
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    review_repo: Arc<dyn ReviewRepositoryPort>,
    default_page_size: u32,
    max_page_size: u32,
}

impl ListBooksHandler {
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        review_repo: Arc<dyn ReviewRepositoryPort>,
        default_page_size: u32,
        max_page_size: u32,
    ) -> Self {
        Self {
            book_repo,
            review_repo,
            default_page_size,
            max_page_size,
        }
    }

    pub async fn handle(&self, query: ListBooks) -> Result<BookPage, ApplicationError> {
        let page = PageRequest::from_raw(
            query.page.as_deref(),
            query.limit.as_deref(),
            self.default_page_size,
            self.max_page_size,
        );
        let filter = BookFilter::new(query.genre, query.author);

        let books = self
            .book_repo
            .find_page(&filter, page.offset(), page.limit())
            .await?;
        let total_books = self.book_repo.count(&filter).await?;

        // 整页一次汇总评分
        let ids: Vec<Uuid> = books.iter().map(|b| b.id).collect();
        let summaries = self.review_repo.summarize_by_books(&ids).await?;

        let books = books
            .into_iter()
            .map(|book| {
                let summary = summaries.get(&book.id).copied().unwrap_or_default();
                BookListItem {
                    average_rating: summary.average(),
                    book,
                }
            })
            .collect();

        Ok(BookPage {
            books,
            current_page: page.page(),
            total_pages: page.total_pages(total_books),
            total_books,
        })
    }
}
