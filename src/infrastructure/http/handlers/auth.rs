//! Auth HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::{GetCurrentUser, Login, Signup};
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::dto::{LoginRequest, SignupRequest, TokenResponse, UserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 注册
pub async fn signup(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let Json(req) = payload?;

    let response = state
        .signup_handler
        .handle(Signup {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(response.into())))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(req) = payload?;

    let response = state
        .login_handler
        .handle(Login {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(response.into()))
}

/// 当前用户
pub async fn me(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<UserResponse>, ApiError> {
    let profile = state
        .get_current_user_handler
        .handle(GetCurrentUser { user_id: user.id })
        .await?;

    Ok(Json(profile.into()))
}
