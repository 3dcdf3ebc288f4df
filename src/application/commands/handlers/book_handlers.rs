//! Book Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateBook, DeleteBook};
use crate::application::error::{ApplicationError, Validator};
use crate::application::ports::{BookRecord, BookRepositoryPort, RepositoryError};
use crate::domain::account::UserId;
use crate::domain::book::{ensure_owner, Author, Book, Genre, Title};

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<BookRecord, ApplicationError> {
        let mut v = Validator::new();
        let fields = (
            v.check(Title::new(command.title.unwrap_or_default())),
            v.check(Author::new(command.author.unwrap_or_default())),
            v.check(Genre::new(command.genre.unwrap_or_default())),
        );
        let (Some(title), Some(author), Some(genre)) = fields else {
            return Err(v.into_error());
        };

        let book = Book::new(
            title,
            author,
            genre,
            command.description,
            command.image_url,
            UserId::from_uuid(command.owner_id),
        );
        let record = BookRecord::from(&book);

        self.book_repo.save(&record).await?;

        tracing::info!(
            book_id = %record.id,
            title = %record.title,
            owner = %record.added_by,
            "Book created"
        );

        Ok(record)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// 删除书籍响应
#[derive(Debug, Clone)]
pub struct DeleteBookResponse {
    pub book_id: Uuid,
    pub reviews_removed: u64,
}

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<DeleteBookResponse, ApplicationError> {
        let book_id = command.book_id;

        // 检查书籍是否存在
        let book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book"))?;

        if let Err(e) = ensure_owner(
            &UserId::from_uuid(book.added_by),
            &UserId::from_uuid(command.requester_id),
        ) {
            tracing::warn!(
                book_id = %book_id,
                owner = %book.added_by,
                requester = %command.requester_id,
                "Rejected delete from non-owner"
            );
            return Err(ApplicationError::unauthorized(e.to_string()));
        }

        let reviews_removed = match self.book_repo.delete_with_reviews(book_id).await {
            Ok(n) => n,
            // 并发删除：检查之后书籍已被删掉
            Err(RepositoryError::NotFound(_)) => return Err(ApplicationError::not_found("Book")),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            book_id = %book_id,
            title = %book.title,
            reviews_removed,
            "Book deleted"
        );

        Ok(DeleteBookResponse {
            book_id,
            reviews_removed,
        })
    }
}
