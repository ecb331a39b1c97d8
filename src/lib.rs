//! Todo Store - 待办事项 CRUD 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Todo Context: 待办实体与标识
//!
//! 应用层 (application/):
//! - Ports: TodoStorePort（带类型属性的键值存储）
//! - Codec: Todo <-> 存储属性
//! - Commands / Queries: 五个操作各一个处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: DynamoDB + 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::{load_config, AppConfig};
