//! Todo Commands

use serde::{Deserialize, Serialize};

use crate::domain::TodoId;

/// 创建待办命令
///
/// 调用方只能决定描述；id、完成状态、创建时间由服务端生成
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub description: String,
}

/// 更新待办命令
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub todo_id: TodoId,
    pub changes: TodoChanges,
}

/// 可更新字段
///
/// 未给出的字段不会写入存储；更新成功后原样回显给调用方
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

/// 删除待办命令
#[derive(Debug, Clone)]
pub struct DeleteTodo {
    pub todo_id: TodoId,
}
