//! Account Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AccountError;

/// 密码最小长度
pub const MIN_PASSWORD_CHARS: usize = 6;

/// 用户唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 用户名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Result<Self, AccountError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(AccountError::EmptyUsername);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 邮箱（统一小写存储）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, AccountError> {
        let email = email.into().trim().to_lowercase();
        let (local, domain) = email.split_once('@').ok_or(AccountError::InvalidEmail)?;
        if local.is_empty()
            || domain.contains('@')
            || email.chars().any(char::is_whitespace)
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(AccountError::InvalidEmail);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 注册时的密码策略
pub fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.is_empty() {
        return Err(AccountError::EmptyPassword);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AccountError::PasswordTooShort(MIN_PASSWORD_CHARS));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert_eq!(Username::new("  alice ").unwrap().as_str(), "alice");
        assert_eq!(Username::new(" "), Err(AccountError::EmptyUsername));
        assert!(Username::new("a".repeat(300)).is_ok());
    }

    #[test]
    fn test_email_is_normalized() {
        assert_eq!(
            Email::new(" Alice@Example.COM ").unwrap().as_str(),
            "alice@example.com"
        );
    }

    #[test]
    fn test_invalid_emails() {
        for raw in ["", "alice", "@example.com", "alice@", "alice@example", "a@b@c.com", "al ice@x.io", "a@.com"] {
            assert_eq!(Email::new(raw), Err(AccountError::InvalidEmail), "{}", raw);
        }
    }

    #[test]
    fn test_password_policy() {
        assert_eq!(validate_password(""), Err(AccountError::EmptyPassword));
        assert_eq!(
            validate_password("12345"),
            Err(AccountError::PasswordTooShort(MIN_PASSWORD_CHARS))
        );
        assert!(validate_password("123456").is_ok());
    }
}
