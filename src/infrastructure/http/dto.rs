//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::TodoChanges;
use crate::domain::Todo;

// ============================================================================
// 请求
// ============================================================================

/// 创建请求
///
/// 调用方传入的 `id` / `createdAt` / `complete` 都会被忽略
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub description: String,
}

/// 更新请求，与回显内容同构
pub type UpdateTodoRequest = TodoChanges;

// ============================================================================
// 响应
// ============================================================================

/// `{ "todos": [...] }`
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

/// `{ "todo": {...} }`
#[derive(Debug, Serialize)]
pub struct TodoResponse<T: Serialize> {
    pub todo: T,
}

impl<T: Serialize> TodoResponse<T> {
    pub fn new(todo: T) -> Self {
        Self { todo }
    }
}

/// `{ "status": "success" }`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_ignores_server_fields() {
        let req: CreateTodoRequest = serde_json::from_str(
            r#"{"description":"x","complete":true,"id":"caller-chosen","createdAt":1}"#,
        )
        .unwrap();
        assert_eq!(req.description, "x");
    }

    #[test]
    fn test_update_request_echo_skips_absent_fields() {
        let req: UpdateTodoRequest = serde_json::from_str(r#"{"complete":true}"#).unwrap();
        let body = serde_json::to_value(TodoResponse::new(req)).unwrap();
        assert_eq!(body, serde_json::json!({ "todo": { "complete": true } }));
    }
}
