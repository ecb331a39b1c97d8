//! Todo Store - 待办事项 CRUD 服务

use std::sync::Arc;

use todo_store::application::TodoStorePort;
use todo_store::config::{load_config, print_config, AppConfig, StoreBackend};
use todo_store::infrastructure::http::{AppState, HttpServer, ServerConfig};
use todo_store::infrastructure::persistence::dynamodb::{create_client, DynamoTodoStore};
use todo_store::infrastructure::persistence::memory::InMemoryTodoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：部署变量 > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Todo Store");
    print_config(&config);

    // 存储客户端只在启动时创建一次，所有请求共享
    let store = create_store(&config).await;

    let state = AppState::new(store);
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},todo_store={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn create_store(config: &AppConfig) -> Arc<dyn TodoStorePort> {
    let store: Arc<dyn TodoStorePort> = match config.store.backend {
        StoreBackend::Dynamodb => {
            let client = create_client(&config.store).await;
            Arc::new(DynamoTodoStore::new(client, &config.store.table_name))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            InMemoryTodoStore::new().arc()
        }
    };
    store
}
