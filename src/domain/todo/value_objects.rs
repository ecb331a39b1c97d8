//! Todo Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 待办事项唯一标识
///
/// 新建时由服务端生成 UUID v4；查询/更新/删除时接受任意字符串，
/// 不是本服务生成的 id 只会表现为"不存在"。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// 生成新的 id（每次调用都消耗新的随机数）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
