//! Password Hasher Port - 密码哈希

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Password Hasher Port
///
/// 哈希为 CPU 密集操作，调用方应在阻塞线程池中执行
pub trait PasswordHasherPort: Send + Sync {
    /// 生成带盐哈希（PHC 字符串）
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// 校验明文密码与哈希是否匹配
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
