//! Todo Store Port - 出站端口
//!
//! 键值存储的抽象接口，按分区键读写带类型的属性
//! 具体实现在 infrastructure 层（DynamoDB / 内存）

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// 带类型的属性值
///
/// 与存储端的类型化属性模型一一对应：写入时显式标注类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// 字符串
    S(String),
    /// 数字（以字符串形式传输）
    N(String),
    /// 布尔
    Bool(bool),
}

impl AttributeValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::S(_) => "S",
            AttributeValue::N(_) => "N",
            AttributeValue::Bool(_) => "BOOL",
        }
    }
}

/// 一条记录：属性名 -> 属性值
pub type Item = HashMap<String, AttributeValue>;

/// 属性级更新：每个条目都以 PUT 语义无条件覆盖
///
/// 未出现的属性保持存储中的原值
pub type AttributeUpdates = HashMap<String, AttributeValue>;

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 网络或服务端错误
    #[error("Store request failed: {0}")]
    Request(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Todo Store Port
///
/// 每个方法恰好对应一次存储请求（scan 的分页除外），不做重试
#[async_trait]
pub trait TodoStorePort: Send + Sync {
    /// 按键读取，不存在返回 None
    async fn get(&self, key: &str) -> Result<Option<Item>, StoreError>;

    /// 整条写入（无存在性检查）
    async fn put(&self, item: Item) -> Result<(), StoreError>;

    /// 覆盖指定属性；键不存在时会创建只含这些属性的记录
    async fn update(&self, key: &str, updates: AttributeUpdates) -> Result<(), StoreError>;

    /// 按键删除，键不存在不视为错误
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// 全表扫描
    async fn scan(&self) -> Result<Vec<Item>, StoreError>;
}
