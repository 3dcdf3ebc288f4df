//! Auth Extractor
//!
//! 每个请求独立从 `x-auth-token` 头读取并校验令牌

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::application::{AuthUser, TokenError};

/// 令牌所在的请求头
pub const AUTH_HEADER: &str = "x-auth-token";

/// 已认证的当前用户
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthUser);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("No token, authorization denied".to_string()))?;

        match state.tokens.verify(token) {
            Ok(user) => Ok(CurrentUser(user)),
            Err(e) => {
                if let TokenError::Invalid(reason) = &e {
                    tracing::debug!(reason = %reason, "Rejected auth token");
                }
                Err(ApiError::Unauthorized("Token is not valid".to_string()))
            }
        }
    }
}
