//! Review HTTP Handlers

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::book::parse_book_id;
use crate::application::{AddReview, ListBookReviews};
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::{AddReviewRequest, ReviewResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 添加书评
pub async fn add_review(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<AddReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    let book_id = parse_book_id(&id)?;
    let Json(req) = payload?;

    let record = state
        .add_review_handler
        .handle(AddReview {
            book_id,
            reviewer: user,
            rating: req.rating,
            comment: req.comment,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// 一本书的所有书评，最新在前
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ReviewResponse>>, ApiError> {
    let book_id = parse_book_id(&id)?;

    let reviews = state
        .list_book_reviews_handler
        .handle(ListBookReviews { book_id })
        .await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
