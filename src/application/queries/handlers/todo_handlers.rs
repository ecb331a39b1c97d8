//! Todo Query Handlers

use std::sync::Arc;

use crate::application::codec;
use crate::application::error::ApplicationError;
use crate::application::ports::TodoStorePort;
use crate::application::queries::{GetTodo, ListTodos};
use crate::domain::Todo;

/// GetTodo Handler
pub struct GetTodoHandler {
    store: Arc<dyn TodoStorePort>,
}

impl GetTodoHandler {
    pub fn new(store: Arc<dyn TodoStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetTodo) -> Result<Todo, ApplicationError> {
        let key = codec::encode_key(&query.todo_id);

        let item = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Todo", query.todo_id.clone()))?;

        Ok(codec::decode(&item)?)
    }
}

/// ListTodos Handler
///
/// 全表扫描，只适合演示规模的数据量
pub struct ListTodosHandler {
    store: Arc<dyn TodoStorePort>,
}

impl ListTodosHandler {
    pub fn new(store: Arc<dyn TodoStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListTodos) -> Result<Vec<Todo>, ApplicationError> {
        let items = self.store.scan().await?;

        // 无法解码的记录（如对不存在 id 的更新留下的残缺记录）跳过
        let todos = items
            .iter()
            .filter_map(|item| match codec::decode(item) {
                Ok(todo) => Some(todo),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping undecodable todo record");
                    None
                }
            })
            .collect();

        Ok(todos)
    }
}
