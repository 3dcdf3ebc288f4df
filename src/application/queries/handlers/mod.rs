//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod account_handlers;
mod book_handlers;
mod review_handlers;

pub use account_handlers::*;
pub use book_handlers::*;
pub use review_handlers::*;
