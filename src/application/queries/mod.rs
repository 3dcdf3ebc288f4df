//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod account_queries;
mod book_queries;
mod review_queries;

pub mod handlers;

pub use account_queries::*;
pub use book_queries::*;
pub use review_queries::*;
