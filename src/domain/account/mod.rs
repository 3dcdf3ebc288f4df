//! Account Context - 用户账号上下文
//!
//! 只包含账号字段校验；凭证存储与令牌签发在 application/ports 中定义

mod errors;
mod value_objects;

pub use errors::AccountError;
pub use value_objects::{validate_password, Email, UserId, Username, MIN_PASSWORD_CHARS};
