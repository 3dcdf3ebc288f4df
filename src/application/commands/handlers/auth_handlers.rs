//! Auth Command Handlers - 注册与登录

use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{Login, Signup};
use crate::application::error::{ApplicationError, Validator};
use crate::application::ports::{
    AuthUser, PasswordHasherPort, TokenServicePort, UserRecord, UserRepositoryPort,
};
use crate::domain::account::{validate_password, AccountError, Email, Username};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// 登录/注册成功响应
#[derive(Debug, Clone)]
pub struct AuthTokenResponse {
    pub token: String,
    pub user: AuthUser,
}

// ============================================================================
// Signup
// ============================================================================

/// Signup Handler
pub struct SignupHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenServicePort>,
}

impl SignupHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, command: Signup) -> Result<AuthTokenResponse, ApplicationError> {
        let password = command.password.unwrap_or_default();

        let mut v = Validator::new();
        let fields = (
            v.check(Username::new(command.username.unwrap_or_default())),
            v.check(Email::new(command.email.unwrap_or_default())),
            v.check(validate_password(&password)),
        );
        let (Some(username), Some(email), Some(())) = fields else {
            return Err(v.into_error());
        };

        if self.user_repo.find_by_email(email.as_str()).await?.is_some() {
            return Err(ApplicationError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_blocking(self.hasher.clone(), password).await?;

        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.as_str().to_string(),
            email: email.as_str().to_string(),
            password_hash,
            created_at: Utc::now().trunc_subsecs(6),
        };
        self.user_repo.insert(&user).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        let auth_user = AuthUser {
            id: user.id,
            username: user.username,
        };
        let token = self.tokens.issue(&auth_user)?;

        Ok(AuthTokenResponse {
            token,
            user: auth_user,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login Handler
pub struct LoginHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenServicePort>,
}

impl LoginHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenServicePort>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    /// 邮箱不存在与密码错误返回同一错误，不暴露账号是否存在
    pub async fn handle(&self, command: Login) -> Result<AuthTokenResponse, ApplicationError> {
        let password = command.password.unwrap_or_default();

        let mut v = Validator::new();
        let fields = (
            v.check(Email::new(command.email.unwrap_or_default())),
            v.check(if password.is_empty() {
                Err(AccountError::EmptyPassword)
            } else {
                Ok(())
            }),
        );
        let (Some(email), Some(())) = fields else {
            return Err(v.into_error());
        };

        let Some(user) = self.user_repo.find_by_email(email.as_str()).await? else {
            tracing::warn!(email = %email.as_str(), "Login with unknown email");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = verify_blocking(self.hasher.clone(), password, user.password_hash).await?;
        if !matches {
            tracing::warn!(user_id = %user.id, "Login with wrong password");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        }

        let auth_user = AuthUser {
            id: user.id,
            username: user.username,
        };
        let token = self.tokens.issue(&auth_user)?;

        tracing::info!(user_id = %auth_user.id, "User logged in");

        Ok(AuthTokenResponse {
            token,
            user: auth_user,
        })
    }
}

/// 在阻塞线程池中计算哈希
async fn hash_blocking(
    hasher: Arc<dyn PasswordHasherPort>,
    password: String,
) -> Result<String, ApplicationError> {
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ApplicationError::internal(format!("Password hashing task failed: {}", e)))??;
    Ok(hash)
}

async fn verify_blocking(
    hasher: Arc<dyn PasswordHasherPort>,
    password: String,
    hash: String,
) -> Result<bool, ApplicationError> {
    let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| ApplicationError::internal(format!("Password verify task failed: {}", e)))??;
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContext;

    fn signup(username: &str, email: &str, password: &str) -> Signup {
        Signup {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login(email: &str, password: &str) -> Login {
        Login {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let ctx = TestContext::new().await;
        let signup_handler = ctx.signup_handler();
        let login_handler = ctx.login_handler();

        let created = signup_handler
            .handle(signup("alice", "Alice@Example.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(created.user.username, "alice");
        assert_eq!(ctx.tokens.verify(&created.token).unwrap(), created.user);

        let logged_in = login_handler
            .handle(login("alice@example.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(logged_in.user, created.user);

        let stored = ctx
            .user_repo
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password_hash, "secret1");
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let ctx = TestContext::new().await;

        let result = ctx.signup_handler().handle(signup("", "nope", "123")).await;
        match result {
            Err(ApplicationError::InvalidInput(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["username", "email", "password"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let ctx = TestContext::new().await;
        let handler = ctx.signup_handler();

        handler
            .handle(signup("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();
        let result = handler
            .handle(signup("alice2", "ALICE@example.com", "secret2"))
            .await;
        assert!(matches!(result, Err(ApplicationError::Conflict(_))));

        // 用户名重复由唯一索引拦截
        let result = handler
            .handle(signup("alice", "other@example.com", "secret3"))
            .await;
        assert!(matches!(result, Err(ApplicationError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let ctx = TestContext::new().await;
        ctx.signup_handler()
            .handle(signup("alice", "alice@example.com", "secret1"))
            .await
            .unwrap();
        let handler = ctx.login_handler();

        let wrong_password = handler.handle(login("alice@example.com", "secret2")).await;
        let unknown_email = handler.handle(login("bob@example.com", "secret1")).await;

        match (wrong_password, unknown_email) {
            (Err(ApplicationError::Unauthorized(a)), Err(ApplicationError::Unauthorized(b))) => {
                assert_eq!(a, b);
                assert_eq!(a, INVALID_CREDENTIALS);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
