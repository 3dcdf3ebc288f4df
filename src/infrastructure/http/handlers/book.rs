//! Book HTTP Handlers

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks};
use crate::domain::book::BookId;
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::{
    BookDetailResponse, BookPageResponse, BookResponse, CreateBookRequest, ListBooksParams,
    MessageResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 路径中的书籍 ID；格式不合法按不存在处理
pub(crate) fn parse_book_id(raw: &str) -> Result<Uuid, ApiError> {
    BookId::parse(raw)
        .map(|id| *id.as_uuid())
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))
}

/// 分页列出书籍
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<BookPageResponse>, ApiError> {
    let Query(params) = params?;

    let page = state
        .list_books_handler
        .handle(ListBooks {
            page: params.page,
            limit: params.limit,
            genre: params.genre,
            author: params.author,
        })
        .await?;

    Ok(Json(page.into()))
}

/// 创建书籍
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(req) = payload?;

    let record = state
        .create_book_handler
        .handle(CreateBook {
            title: req.title,
            author: req.author,
            genre: req.genre,
            description: req.description,
            image_url: req.image_url,
            owner_id: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// 书籍详情（含书评与平均分）
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookDetailResponse>, ApiError> {
    let book_id = parse_book_id(&id)?;

    let detail = state.get_book_handler.handle(GetBook { book_id }).await?;

    Ok(Json(detail.into()))
}

/// 删除书籍（仅限创建者）
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let book_id = parse_book_id(&id)?;

    state
        .delete_book_handler
        .handle(DeleteBook {
            book_id,
            requester_id: user.id,
        })
        .await?;

    Ok(Json(MessageResponse::new("Book and associated reviews removed")))
}
