//! Token Service Port - 访问令牌签发与校验
//!
//! 具体实现在 infrastructure/adapters/auth（JWT）

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token 错误
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is not valid: {0}")]
    Invalid(String),

    #[error("Failed to issue token: {0}")]
    Encoding(String),
}

/// 令牌中携带的用户身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

/// Token Service Port
pub trait TokenServicePort: Send + Sync {
    /// 为用户签发令牌
    fn issue(&self, user: &AuthUser) -> Result<String, TokenError>;

    /// 校验令牌并返回用户身份
    fn verify(&self, token: &str) -> Result<AuthUser, TokenError>;
}
