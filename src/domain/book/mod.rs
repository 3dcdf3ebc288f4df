//! Book Context - 书籍限界上下文
//!
//! 职责:
//! - 书籍聚合（书名、作者、类型、所有者）
//! - 字段校验
//! - 删除权限

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{ensure_owner, Book};
pub use errors::BookError;
pub use value_objects::{optional_text, Author, BookId, Genre, Title};
