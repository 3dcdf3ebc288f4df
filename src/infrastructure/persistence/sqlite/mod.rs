//! SQLite Persistence - SQLite 数据库持久化实现

mod book_repo;
mod database;
mod review_repo;
mod user_repo;

pub use book_repo::*;
pub use database::{create_pool, run_migrations, DbPool};
pub use review_repo::*;
pub use user_repo::*;
