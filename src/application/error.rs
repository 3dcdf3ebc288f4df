//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use serde::Serialize;
use thiserror::Error;

use crate::application::ports::{PasswordError, RepositoryError, TokenError};
use crate::domain::account::AccountError;
use crate::domain::book::BookError;
use crate::domain::review::ReviewError;

/// 字段级校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<BookError> for FieldError {
    fn from(e: BookError) -> Self {
        Self::new(e.field(), e.to_string())
    }
}

impl From<ReviewError> for FieldError {
    fn from(e: ReviewError) -> Self {
        Self::new(e.field(), e.to_string())
    }
}

impl From<AccountError> for FieldError {
    fn from(e: AccountError) -> Self {
        Self::new(e.field(), e.to_string())
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found")]
    NotFound { resource_type: &'static str },

    /// 字段校验失败
    #[error("Validation failed")]
    InvalidInput(Vec<FieldError>),

    /// 未认证或无权限
    #[error("{0}")]
    Unauthorized(String),

    /// 资源冲突（如重复注册）
    #[error("{0}")]
    Conflict(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str) -> Self {
        Self::NotFound { resource_type }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(msg) => Self::Conflict(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<PasswordError> for ApplicationError {
    fn from(err: PasswordError) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<TokenError> for ApplicationError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(msg) => Self::InternalError(msg),
            other => Self::Unauthorized(other.to_string()),
        }
    }
}

/// 收集多个字段的校验结果，一次性报告所有字段的错误
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<FieldError>,
    {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.push(e.into());
                None
            }
        }
    }

    /// 以已收集的错误构造 InvalidInput
    ///
    /// 在某个 `check` 返回 None 之后调用
    pub fn into_error(self) -> ApplicationError {
        ApplicationError::InvalidInput(self.errors)
    }
}
