//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Author is required")]
    EmptyAuthor,

    #[error("Genre is required")]
    EmptyGenre,

    #[error("User not authorized to delete this book")]
    NotOwner,
}

impl BookError {
    /// 出错的请求字段名
    pub fn field(&self) -> &'static str {
        match self {
            BookError::EmptyTitle => "title",
            BookError::EmptyAuthor => "author",
            BookError::EmptyGenre => "genre",
            BookError::NotOwner => "addedBy",
        }
    }
}
