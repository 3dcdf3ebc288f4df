//! Data Transfer Objects
//!
//! JSON 字段统一使用 camelCase，资源标识序列化为 `_id`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{
    AuthTokenResponse, BookDetail, BookListItem, BookPage, BookRecord, ReviewRecord, UserProfile,
};

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

impl From<AuthTokenResponse> for TokenResponse {
    fn from(response: AuthTokenResponse) -> Self {
        Self {
            token: response.token,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// 列表查询参数，数字参数保留原始字符串以便宽松解析
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub genre: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub added_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<BookRecord> for BookResponse {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            genre: record.genre,
            description: record.description,
            image_url: record.image_url,
            added_by: record.added_by,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListItemResponse {
    #[serde(flatten)]
    pub book: BookResponse,
    pub average_rating: f64,
}

impl From<BookListItem> for BookListItemResponse {
    fn from(item: BookListItem) -> Self {
        Self {
            book: item.book.into(),
            average_rating: item.average_rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPageResponse {
    pub books: Vec<BookListItemResponse>,
    pub current_page: u32,
    pub total_pages: u64,
    pub total_books: u64,
}

impl From<BookPage> for BookPageResponse {
    fn from(page: BookPage) -> Self {
        Self {
            books: page.books.into_iter().map(Into::into).collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_books: page.total_books,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailResponse {
    pub book: BookResponse,
    pub reviews: Vec<ReviewResponse>,
    pub average_rating: f64,
}

impl From<BookDetail> for BookDetailResponse {
    fn from(detail: BookDetail) -> Self {
        Self {
            book: detail.book.into(),
            reviews: detail.reviews.into_iter().map(Into::into).collect(),
            average_rating: detail.average_rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

// ============================================================================
// Review DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddReviewRequest {
    /// 保留原始 JSON 值，由领域层判断是否为 1-5 的整数
    #[serde(default)]
    pub rating: serde_json::Value,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewerResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub book: Uuid,
    pub reviewer: ReviewerResponse,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(record: ReviewRecord) -> Self {
        Self {
            id: record.id,
            book: record.book_id,
            reviewer: ReviewerResponse {
                id: record.reviewer_id,
                username: record.reviewer_username,
            },
            rating: record.rating.value(),
            comment: record.comment,
            created_at: record.created_at,
        }
    }
}
