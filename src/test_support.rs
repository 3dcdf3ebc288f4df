//! 测试夹具：内存 SQLite + 真实仓储与适配器

use axum::Router;
use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    AuthUser, BookRecord, BookRepositoryPort, LoginHandler, PasswordHasherPort, ReviewRecord,
    ReviewRepositoryPort, SignupHandler, TokenServicePort, UserRecord, UserRepositoryPort,
};
use crate::config::{DatabaseConfig, ListingConfig};
use crate::domain::rating::Rating;
use crate::infrastructure::adapters::{Argon2PasswordHasher, JwtTokenService};
use crate::infrastructure::http::{build_app, AppState};
use crate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DbPool, SqliteBookRepository, SqliteReviewRepository,
    SqliteUserRepository,
};

pub const TEST_SECRET: &str = "test-secret";

pub struct TestContext {
    pub pool: DbPool,
    pub book_repo: Arc<dyn BookRepositoryPort>,
    pub review_repo: Arc<dyn ReviewRepositoryPort>,
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub hasher: Arc<dyn PasswordHasherPort>,
    pub tokens: Arc<dyn TokenServicePort>,
}

impl TestContext {
    pub async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        Self {
            book_repo: Arc::new(SqliteBookRepository::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepository::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepository::new(pool.clone())),
            // 测试用低成本参数
            hasher: Arc::new(Argon2PasswordHasher::with_params(8, 1, 1).unwrap()),
            tokens: Arc::new(JwtTokenService::new(TEST_SECRET, 3600)),
            pool,
        }
    }

    pub fn signup_handler(&self) -> SignupHandler {
        SignupHandler::new(self.user_repo.clone(), self.hasher.clone(), self.tokens.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.user_repo.clone(), self.hasher.clone(), self.tokens.clone())
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.book_repo.clone(),
            self.review_repo.clone(),
            self.user_repo.clone(),
            self.hasher.clone(),
            self.tokens.clone(),
            &ListingConfig::default(),
        )
    }

    pub fn app(&self) -> Router {
        build_app(Arc::new(self.state()), 1024 * 1024)
    }

    /// 直接写入用户（跳过密码哈希）
    pub async fn create_user(&self, name: &str) -> AuthUser {
        let user = UserRecord {
            id: Uuid::new_v4(),
            username: name.to_string(),
            email: format!("{}@example.com", name),
            password_hash: "$argon2id$unused".to_string(),
            created_at: Utc::now().trunc_subsecs(6),
        };
        self.user_repo.insert(&user).await.unwrap();

        AuthUser {
            id: user.id,
            username: user.username,
        }
    }

    pub fn token_for(&self, user: &AuthUser) -> String {
        self.tokens.issue(user).unwrap()
    }

    pub async fn create_book(
        &self,
        owner: &AuthUser,
        title: &str,
        author: &str,
        genre: &str,
    ) -> BookRecord {
        let book = BookRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            description: None,
            image_url: None,
            added_by: owner.id,
            created_at: Utc::now().trunc_subsecs(6),
        };
        self.book_repo.save(&book).await.unwrap();
        book
    }

    pub async fn add_review(&self, book_id: Uuid, reviewer: &AuthUser, rating: i64) -> ReviewRecord {
        let review = ReviewRecord {
            id: Uuid::new_v4(),
            book_id,
            reviewer_id: reviewer.id,
            reviewer_username: Some(reviewer.username.clone()),
            rating: Rating::new(rating).unwrap(),
            comment: format!("Rated {}", rating),
            created_at: Utc::now().trunc_subsecs(6),
        };
        self.review_repo.save(&review).await.unwrap();
        review
    }
}
