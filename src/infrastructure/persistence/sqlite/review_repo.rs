//! SQLite Review Repository

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::collections::HashMap;
use uuid::Uuid;

use super::database::{db_error, decode_timestamp, encode_timestamp};
use super::DbPool;
use crate::application::ports::{RepositoryError, ReviewRecord, ReviewRepositoryPort};
use crate::domain::rating::{Rating, RatingSummary};

/// SQLite Review Repository
pub struct SqliteReviewRepository {
    pool: DbPool,
}

impl SqliteReviewRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ReviewRow {
    id: String,
    book_id: String,
    reviewer_id: String,
    reviewer_username: Option<String>,
    rating: i64,
    comment: String,
    created_at: String,
}

impl TryFrom<ReviewRow> for ReviewRecord {
    type Error = RepositoryError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let parse_uuid = |raw: &str| {
            Uuid::parse_str(raw).map_err(|e| RepositoryError::SerializationError(e.to_string()))
        };

        Ok(ReviewRecord {
            id: parse_uuid(&row.id)?,
            book_id: parse_uuid(&row.book_id)?,
            reviewer_id: parse_uuid(&row.reviewer_id)?,
            reviewer_username: row.reviewer_username,
            rating: Rating::new(row.rating)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            comment: row.comment,
            created_at: decode_timestamp(&row.created_at)?,
        })
    }
}

#[derive(FromRow)]
struct SummaryRow {
    book_id: String,
    total: i64,
    count: i64,
}

#[async_trait]
impl ReviewRepositoryPort for SqliteReviewRepository {
    async fn save(&self, review: &ReviewRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, book_id, reviewer_id, rating, comment, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.id.to_string())
        .bind(review.book_id.to_string())
        .bind(review.reviewer_id.to_string())
        .bind(review.rating.value() as i64)
        .bind(&review.comment)
        .bind(encode_timestamp(&review.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // 书籍在写入前已被删除
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::NotFound(format!("Book {}", review.book_id))
            }
            other => db_error(other),
        })?;

        Ok(())
    }

    async fn find_by_book(&self, book_id: Uuid) -> Result<Vec<ReviewRecord>, RepositoryError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT r.id, r.book_id, r.reviewer_id, u.username AS reviewer_username,
                   r.rating, r.comment, r.created_at
            FROM reviews r
            LEFT JOIN users u ON u.id = r.reviewer_id
            WHERE r.book_id = ?
            ORDER BY r.created_at DESC, r.rowid DESC
            "#,
        )
        .bind(book_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(ReviewRecord::try_from).collect()
    }

    async fn summarize_by_books(
        &self,
        book_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, RatingSummary>, RepositoryError> {
        if book_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT book_id, SUM(rating) AS total, COUNT(*) AS count FROM reviews WHERE book_id IN (",
        );
        let mut ids = builder.separated(", ");
        for id in book_ids {
            ids.push_bind(id.to_string());
        }
        ids.push_unseparated(") GROUP BY book_id");

        let rows: Vec<SummaryRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter()
            .map(|row| {
                let id = Uuid::parse_str(&row.book_id)
                    .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
                Ok((id, RatingSummary::new(row.total as u64, row.count as u64)))
            })
            .collect()
    }
}
