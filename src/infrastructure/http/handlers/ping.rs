//! Ping Handler

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::application::BookFilter;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_books: Option<u64>,
}

/// Ping endpoint - 健康检查，数据库不可用时返回 503
pub async fn ping(State(state): State<Arc<AppState>>) -> (StatusCode, Json<PingResponse>) {
    match state.book_repo.count(&BookFilter::default()).await {
        Ok(total) => (
            StatusCode::OK,
            Json(PingResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                database: "ok",
                total_books: Some(total),
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(PingResponse {
                    status: "degraded",
                    version: env!("CARGO_PKG_VERSION"),
                    database: "unavailable",
                    total_books: None,
                }),
            )
        }
    }
}
