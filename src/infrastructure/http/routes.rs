//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                  GET     健康检查
//! - /api/auth/signup           POST    注册
//! - /api/auth/login            POST    登录
//! - /api/auth/me               GET     当前用户（需认证）
//! - /api/books                 GET     分页列出书籍（page, limit, genre, author）
//! - /api/books                 POST    创建书籍（需认证）
//! - /api/books/:id             GET     书籍详情 + 书评 + 平均分
//! - /api/books/:id             DELETE  删除书籍及其书评（仅创建者）
//! - /api/books/:id/reviews     GET     书评列表
//! - /api/books/:id/reviews     POST    添加书评（需认证）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/auth", auth_routes())
        .nest("/books", book_routes())
}

/// Auth 路由
fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/me", get(handlers::me))
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_books).post(handlers::create_book))
        .route("/:id", get(handlers::get_book).delete(handlers::delete_book))
        .route(
            "/:id/reviews",
            get(handlers::list_reviews).post(handlers::add_review),
        )
}
