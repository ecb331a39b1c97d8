//! Todo Context - Entity

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::TodoId;

/// 待办事项
///
/// 不变量:
/// - `id` 一经分配不可修改，也不会复用
/// - `created_at` 只在创建时由服务端设置一次，不信任调用方输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub complete: bool,
    /// 创建时间（毫秒时间戳）
    pub created_at: i64,
}

impl Todo {
    /// 创建新的待办事项
    ///
    /// id 与创建时间每次现取，`complete` 固定为 false
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            description: description.into(),
            complete: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
