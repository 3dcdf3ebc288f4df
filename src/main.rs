//! Shelf - 书评服务后端
//!
//! - Domain: book/, review/, account/, rating
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence, adapters

use std::sync::Arc;

use shelf::config::{load_config, print_config, LogConfig};
use shelf::infrastructure::adapters::{Argon2PasswordHasher, JwtTokenService};
use shelf::infrastructure::http::{AppState, HttpServer};
use shelf::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, SqliteBookRepository, SqliteReviewRepository,
    SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Shelf - book review service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let book_repo = Arc::new(SqliteBookRepository::new(pool.clone()));
    let review_repo = Arc::new(SqliteReviewRepository::new(pool.clone()));
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));

    // 认证适配器
    let hasher = Arc::new(Argon2PasswordHasher::new());
    let tokens = Arc::new(JwtTokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_secs,
    ));

    let state = AppState::new(
        book_repo,
        review_repo,
        user_repo,
        hasher,
        tokens,
        &config.listing,
    );

    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server.run_with_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志；`RUST_LOG` 优先于配置的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},shelf={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await
        }
    }
}
