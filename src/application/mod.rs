//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、TokenService、PasswordHasher）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Auth commands
    Login,
    Signup,
    // Book commands
    CreateBook,
    DeleteBook,
    // Review commands
    AddReview,
    // Handlers
    handlers::{
        AddReviewHandler, AuthTokenResponse, CreateBookHandler, DeleteBookHandler,
        DeleteBookResponse, LoginHandler, SignupHandler,
    },
};

pub use error::{ApplicationError, FieldError};

pub use ports::{
    // Auth
    AuthUser,
    PasswordError,
    PasswordHasherPort,
    TokenError,
    TokenServicePort,
    // Repositories
    BookFilter,
    BookRecord,
    BookRepositoryPort,
    RepositoryError,
    ReviewRecord,
    ReviewRepositoryPort,
    UserRecord,
    UserRepositoryPort,
};

pub use queries::{
    // Account queries
    GetCurrentUser,
    // Book queries
    GetBook,
    ListBooks,
    // Review queries
    ListBookReviews,
    // Handlers
    handlers::{
        BookDetail, BookListItem, BookPage, GetBookHandler, GetCurrentUserHandler,
        ListBookReviewsHandler, ListBooksHandler, UserProfile,
    },
};
