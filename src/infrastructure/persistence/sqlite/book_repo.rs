//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use super::database::{db_error, decode_timestamp, encode_timestamp};
use super::DbPool;
use crate::application::ports::{BookFilter, BookRecord, BookRepositoryPort, RepositoryError};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: String,
    title: String,
    author: String,
    genre: String,
    description: Option<String>,
    image_url: Option<String>,
    added_by: String,
    created_at: String,
}

impl TryFrom<BookRow> for BookRecord {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(BookRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            title: row.title,
            author: row.author,
            genre: row.genre,
            description: row.description,
            image_url: row.image_url,
            added_by: Uuid::parse_str(&row.added_by)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            created_at: decode_timestamp(&row.created_at)?,
        })
    }
}

// 过滤条件为 NULL 时不生效；非 NULL 时做大小写不敏感的子串匹配。
// SQLite 的 lower() 只处理 ASCII，两侧都在 Rust 中折叠
const FILTER_CLAUSE: &str = r#"
    (?1 IS NULL OR instr(genre_folded, ?1) > 0)
    AND (?2 IS NULL OR instr(author_folded, ?2) > 0)
"#;

fn fold(value: &str) -> String {
    value.to_lowercase()
}

fn folded_filter(filter: &BookFilter) -> (Option<String>, Option<String>) {
    (
        filter.genre.as_deref().map(fold),
        filter.author.as_deref().map(fold),
    )
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn save(&self, book: &BookRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, genre, genre_folded, author_folded,
                               description, image_url, added_by, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(book.id.to_string())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(fold(&book.genre))
        .bind(fold(&book.author))
        .bind(&book.description)
        .bind(&book.image_url)
        .bind(book.added_by.to_string())
        .bind(encode_timestamp(&book.created_at))
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, title, author, genre, description, image_url, added_by, created_at FROM books WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(BookRecord::try_from).transpose()
    }

    async fn find_page(
        &self,
        filter: &BookFilter,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<BookRecord>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT id, title, author, genre, description, image_url, added_by, created_at
            FROM books
            WHERE {}
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?3 OFFSET ?4
            "#,
            FILTER_CLAUSE
        );

        let (genre, author) = folded_filter(filter);
        let rows: Vec<BookRow> = sqlx::query_as(&sql)
            .bind(genre)
            .bind(author)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(BookRecord::try_from).collect()
    }

    async fn count(&self, filter: &BookFilter) -> Result<u64, RepositoryError> {
        let sql = format!("SELECT COUNT(*) FROM books WHERE {}", FILTER_CLAUSE);

        let (genre, author) = folded_filter(filter);
        let count: (i64,) = sqlx::query_as(&sql)
            .bind(genre)
            .bind(author)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count.0 as u64)
    }

    async fn delete_with_reviews(&self, id: Uuid) -> Result<u64, RepositoryError> {
        // 使用事务确保原子性
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let reviews = sqlx::query("DELETE FROM reviews WHERE book_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let books = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        // 书籍不存在：事务随 tx 丢弃回滚
        if books.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Book {}", id)));
        }

        tx.commit().await.map_err(db_error)?;

        Ok(reviews.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ReviewRepositoryPort;
    use crate::test_support::TestContext;

    fn filter(genre: Option<&str>, author: Option<&str>) -> BookFilter {
        BookFilter::new(genre.map(str::to_string), author.map(str::to_string))
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("u1").await;
        let book = ctx.create_book(&owner, "Dune", "Herbert", "Sci-Fi").await;

        let repo = SqliteBookRepository::new(ctx.pool.clone());
        let found = repo.find_by_id(book.id).await.unwrap();
        assert_eq!(found, Some(book));

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_page_order_and_offset() {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("u1").await;
        for i in 0..5 {
            ctx.create_book(&owner, &format!("Book {}", i), "Author", "Genre").await;
        }

        let repo = SqliteBookRepository::new(ctx.pool.clone());
        let page = repo.find_page(&BookFilter::default(), 1, 2).await.unwrap();
        let titles: Vec<_> = page.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Book 3", "Book 2"]);

        let beyond = repo.find_page(&BookFilter::default(), 10, 2).await.unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_filters_match_substrings_ignoring_case() {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("u1").await;
        ctx.create_book(&owner, "The Hobbit", "J.R.R. Tolkien", "High Fantasy").await;
        ctx.create_book(&owner, "Dune", "Frank Herbert", "Sci-Fi").await;

        let repo = SqliteBookRepository::new(ctx.pool.clone());
        assert_eq!(repo.count(&filter(Some("fantasy"), None)).await.unwrap(), 1);
        assert_eq!(repo.count(&filter(None, Some("HERB"))).await.unwrap(), 1);
        assert_eq!(repo.count(&filter(Some("sci"), Some("tolkien"))).await.unwrap(), 0);
        // 空字符串不过滤
        assert_eq!(repo.count(&filter(Some(""), Some(""))).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_filters_fold_non_ascii_case() {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("u1").await;
        ctx.create_book(&owner, "Cien años de soledad", "Gabriel García Márquez", "fantasía").await;
        ctx.create_book(&owner, "Der Zauberberg", "Thomas Mann", "Roman").await;

        let repo = SqliteBookRepository::new(ctx.pool.clone());
        assert_eq!(repo.count(&filter(Some("FANTASÍA"), None)).await.unwrap(), 1);
        assert_eq!(repo.count(&filter(None, Some("GARCÍA"))).await.unwrap(), 1);
        let page = repo
            .find_page(&filter(Some("Fantasía"), Some("MÁRQUEZ")), 0, 10)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].genre, "fantasía");
    }

    #[tokio::test]
    async fn test_filter_treats_wildcards_literally() {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("u1").await;
        ctx.create_book(&owner, "Dune", "Herbert", "Sci-Fi").await;

        let repo = SqliteBookRepository::new(ctx.pool.clone());
        assert_eq!(repo.count(&filter(Some("%"), None)).await.unwrap(), 0);
        assert_eq!(repo.count(&filter(Some("_"), None)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_with_reviews() {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("u1").await;
        let keep = ctx.create_book(&owner, "Emma", "Austen", "Classic").await;
        let gone = ctx.create_book(&owner, "Dune", "Herbert", "Sci-Fi").await;
        ctx.add_review(gone.id, &owner, 4).await;
        ctx.add_review(keep.id, &owner, 2).await;

        let repo = SqliteBookRepository::new(ctx.pool.clone());
        assert_eq!(repo.delete_with_reviews(gone.id).await.unwrap(), 1);
        assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
        assert_eq!(ctx.review_repo.find_by_book(keep.id).await.unwrap().len(), 1);

        let again = repo.delete_with_reviews(gone.id).await;
        assert!(matches!(again, Err(RepositoryError::NotFound(_))));
    }
}
