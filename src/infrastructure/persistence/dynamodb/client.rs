//! DynamoDB 客户端创建

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;

use crate::config::StoreConfig;

/// 创建 DynamoDB 客户端
///
/// 启动时调用一次，之后所有请求复用同一个客户端。
/// region 未配置时走 AWS 默认链（环境变量 / profile）；
/// endpoint 用于指向本地 DynamoDB 等开发环境
pub async fn create_client(config: &StoreConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;

    tracing::info!(
        region = ?sdk_config.region(),
        endpoint = ?config.endpoint,
        "DynamoDB client created"
    );

    Client::new(&sdk_config)
}
