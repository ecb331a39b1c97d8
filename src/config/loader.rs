//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 部署变量（PORT、TABLE_NAME、AWS_REGION、DDB_ENDPOINT）
//! 2. 环境变量（`TODOS_` 前缀）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StoreBackend};

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

/// 部署变量 -> 配置键
const DEPLOYMENT_VARS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("TABLE_NAME", "store.table_name"),
    ("AWS_REGION", "store.region"),
    ("DDB_ENDPOINT", "store.endpoint"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `TODOS_SERVER__PORT=8080`
/// - `TODOS_STORE__BACKEND=memory`
/// - `TODOS_STORE__ENDPOINT=http://localhost:8000`
/// - `PORT=8080 TABLE_NAME=todos DDB_ENDPOINT=`（空值表示不覆盖 endpoint）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let deployment = DEPLOYMENT_VARS
        .iter()
        .map(|(var, key)| (*key, std::env::var(var).ok()));
    build_config(config_path, deployment)
}

fn build_config<'a>(
    config_path: Option<&Path>,
    deployment: impl IntoIterator<Item = (&'a str, Option<String>)>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("store.backend", "dynamodb")?
        .set_default("store.table_name", "todos")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符 __
    builder = builder.add_source(
        Environment::with_prefix("TODOS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 部署变量
    builder = apply_deployment_vars(builder, deployment)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 空字符串视为未设置（如 `DDB_ENDPOINT=""`）
fn apply_deployment_vars<'a>(
    mut builder: ConfigBuilder<DefaultState>,
    vars: impl IntoIterator<Item = (&'a str, Option<String>)>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (key, value) in vars {
        let value = value.filter(|v| !v.is_empty());
        builder = builder.set_override_option(key, value)?;
    }
    Ok(builder)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.store.backend == StoreBackend::Dynamodb && config.store.table_name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Table name cannot be empty".to_string(),
        ));
    }

    if matches!(&config.store.endpoint, Some(endpoint) if endpoint.is_empty()) {
        return Err(ConfigError::ValidationError(
            "Store endpoint cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Store Backend: {}", config.store.backend.as_str());
    if config.store.backend == StoreBackend::Dynamodb {
        tracing::info!("Table: {}", config.store.table_name);
        tracing::info!(
            "Region: {}",
            config.store.region.as_deref().unwrap_or("<sdk default>")
        );
        if let Some(endpoint) = &config.store.endpoint {
            tracing::info!("Endpoint: {}", endpoint);
        }
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
