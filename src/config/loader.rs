//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, DEV_JWT_SECRET};
use crate::domain::pagination::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SHELF_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SHELF_SERVER__PORT=8080`
/// - `SHELF_DATABASE__PATH=/data/shelf.db`
/// - `SHELF_AUTH__JWT_SECRET=...`
/// - `SHELF_LISTING__MAX_PAGE_SIZE=50`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("database.path", "data/shelf.db")?
        .set_default("database.max_connections", 5)?
        .set_default("auth.jwt_secret", DEV_JWT_SECRET)?
        .set_default("auth.token_ttl_secs", 3600)?
        .set_default("listing.default_page_size", DEFAULT_PAGE_SIZE)?
        .set_default("listing.max_page_size", DEFAULT_MAX_PAGE_SIZE)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: SHELF_AUTH__TOKEN_TTL_SECS=7200
    builder = builder.add_source(
        Environment::with_prefix("SHELF")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.auth.jwt_secret.is_empty() {
        return Err(ConfigError::ValidationError(
            "JWT secret cannot be empty".to_string(),
        ));
    }

    if config.auth.token_ttl_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Token TTL cannot be 0".to_string(),
        ));
    }

    let listing = &config.listing;
    if listing.default_page_size == 0 || listing.default_page_size > listing.max_page_size {
        return Err(ConfigError::ValidationError(format!(
            "Default page size must be between 1 and {}",
            listing.max_page_size
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出密钥
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Token TTL: {}s", config.auth.token_ttl_secs);
    tracing::info!(
        "Page Size: default {}, max {}",
        config.listing.default_page_size,
        config.listing.max_page_size
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");

    if config.auth.uses_dev_secret() {
        tracing::warn!("Using the built-in development JWT secret; set SHELF_AUTH__JWT_SECRET");
    }
}
