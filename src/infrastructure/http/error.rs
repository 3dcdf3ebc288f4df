//! HTTP Error Handling
//!
//! 错误以真实的 HTTP 状态码返回，响应体为
//! `{ "msg": <message>, "errno": <status>, "errors"?: [...] }`

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, FieldError};

/// 对外隐藏细节的服务端错误信息
const SERVER_ERROR: &str = "Server error";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
    pub errno: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        message: String,
        errors: Vec<FieldError>,
    },
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (msg, errors) = match self {
            ApiError::BadRequest { message, errors } => {
                tracing::warn!(errno = status.as_u16(), error = %message, fields = errors.len(), "Bad request");
                (message, errors)
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Unauthorized");
                (msg, Vec::new())
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Resource not found");
                (msg, Vec::new())
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Resource conflict");
                (msg, Vec::new())
            }
            ApiError::Internal(msg) => {
                // 细节只进日志
                tracing::error!(errno = status.as_u16(), error = %msg, "Internal server error");
                (SERVER_ERROR.to_string(), Vec::new())
            }
        };

        let body = ErrorResponse {
            msg,
            errno: status.as_u16(),
            errors,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::InvalidInput(errors) => ApiError::BadRequest {
                message: validation_summary(&errors),
                errors,
            },
            ApplicationError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            ApplicationError::Conflict(msg) => ApiError::Conflict(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

/// 校验失败时的概要信息：单个字段直接用其消息
fn validation_summary(errors: &[FieldError]) -> String {
    match errors {
        [only] => only.message.clone(),
        _ => "Validation failed".to_string(),
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
