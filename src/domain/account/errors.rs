//! Account Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Please include a valid email")]
    InvalidEmail,

    #[error("Password is required")]
    EmptyPassword,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

impl AccountError {
    pub fn field(&self) -> &'static str {
        match self {
            AccountError::EmptyUsername => "username",
            AccountError::InvalidEmail => "email",
            AccountError::EmptyPassword | AccountError::PasswordTooShort(_) => "password",
        }
    }
}
