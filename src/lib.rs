//! Shelf - 书评服务后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book / Review / Account 上下文
//! - Rating: 评分与平均分聚合
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repositories, TokenService, PasswordHasher）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Adapters: JWT 令牌、Argon2 密码哈希

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use config::{load_config, AppConfig};
