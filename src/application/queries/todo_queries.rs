//! Todo Queries

use crate::domain::TodoId;

/// 获取单个待办查询
#[derive(Debug, Clone)]
pub struct GetTodo {
    pub todo_id: TodoId,
}

/// 列出所有待办查询
#[derive(Debug, Clone)]
pub struct ListTodos;
