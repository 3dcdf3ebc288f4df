//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Book Context: 书籍管理
//! - Review Context: 书评
//! - Account Context: 用户账号
//!
//! 以及共享的评分聚合与分页参数

pub mod account;
pub mod book;
pub mod review;

pub mod pagination;
pub mod rating;

pub use pagination::PageRequest;
pub use rating::{Rating, RatingError, RatingSummary};
