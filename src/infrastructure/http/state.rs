//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddReviewHandler, CreateBookHandler, DeleteBookHandler, LoginHandler, SignupHandler,
    // Query handlers
    GetBookHandler, GetCurrentUserHandler, ListBookReviewsHandler, ListBooksHandler,
    // Ports
    BookRepositoryPort, PasswordHasherPort, ReviewRepositoryPort, TokenServicePort,
    UserRepositoryPort,
};
use crate::config::ListingConfig;

/// 应用状态
///
/// 请求之间只读共享，没有可变的全局认证状态
pub struct AppState {
    // ========== Ports ==========
    pub tokens: Arc<dyn TokenServicePort>,
    /// 健康检查直接探测书籍存储
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== Command Handlers ==========
    pub signup_handler: SignupHandler,
    pub login_handler: LoginHandler,
    pub create_book_handler: CreateBookHandler,
    pub delete_book_handler: DeleteBookHandler,
    pub add_review_handler: AddReviewHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
    pub list_book_reviews_handler: ListBookReviewsHandler,
    pub get_current_user_handler: GetCurrentUserHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        review_repo: Arc<dyn ReviewRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
        listing: &ListingConfig,
    ) -> Self {
        Self {
            tokens: tokens.clone(),
            book_repo: book_repo.clone(),

            // Command handlers
            signup_handler: SignupHandler::new(user_repo.clone(), hasher.clone(), tokens.clone()),
            login_handler: LoginHandler::new(user_repo.clone(), hasher, tokens),
            create_book_handler: CreateBookHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),
            add_review_handler: AddReviewHandler::new(book_repo.clone(), review_repo.clone()),

            // Query handlers
            get_book_handler: GetBookHandler::new(book_repo.clone(), review_repo.clone()),
            list_books_handler: ListBooksHandler::new(
                book_repo.clone(),
                review_repo.clone(),
                listing.default_page_size,
                listing.max_page_size,
            ),
            list_book_reviews_handler: ListBookReviewsHandler::new(book_repo, review_repo),
            get_current_user_handler: GetCurrentUserHandler::new(user_repo),
        }
    }
}
