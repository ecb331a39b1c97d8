//! Todo Command Handlers

use std::sync::Arc;

use crate::application::codec;
use crate::application::commands::{CreateTodo, DeleteTodo, TodoChanges, UpdateTodo};
use crate::application::error::ApplicationError;
use crate::application::ports::TodoStorePort;
use crate::domain::Todo;

// ============================================================================
// CreateTodo
// ============================================================================

/// CreateTodo Handler
pub struct CreateTodoHandler {
    store: Arc<dyn TodoStorePort>,
}

impl CreateTodoHandler {
    pub fn new(store: Arc<dyn TodoStorePort>) -> Self {
        Self { store }
    }

    /// 无条件写入新记录，返回包含生成字段的完整 Todo
    pub async fn handle(&self, command: CreateTodo) -> Result<Todo, ApplicationError> {
        let (todo, item) = codec::encode_for_create(&command.description);

        self.store.put(item).await?;

        tracing::info!(todo_id = %todo.id, "Todo created");

        Ok(todo)
    }
}

// ============================================================================
// UpdateTodo
// ============================================================================

/// UpdateTodo Handler
pub struct UpdateTodoHandler {
    store: Arc<dyn TodoStorePort>,
}

impl UpdateTodoHandler {
    pub fn new(store: Arc<dyn TodoStorePort>) -> Self {
        Self { store }
    }

    /// 盲写覆盖 description / complete
    ///
    /// 不检查记录是否存在：对未创建过的 id 更新会留下只有这两个字段的残缺记录。
    /// 成功后回显调用方的输入，不重新读取
    pub async fn handle(&self, command: UpdateTodo) -> Result<TodoChanges, ApplicationError> {
        let key = codec::encode_key(&command.todo_id);
        let updates = codec::encode_for_update(
            command.changes.description.as_deref(),
            command.changes.complete,
        );

        self.store.update(&key, updates).await?;

        tracing::info!(todo_id = %command.todo_id, "Todo updated");

        Ok(command.changes)
    }
}

// ============================================================================
// DeleteTodo
// ============================================================================

/// DeleteTodo Handler
pub struct DeleteTodoHandler {
    store: Arc<dyn TodoStorePort>,
}

impl DeleteTodoHandler {
    pub fn new(store: Arc<dyn TodoStorePort>) -> Self {
        Self { store }
    }

    /// 幂等删除：只要存储调用本身没有出错就视为成功
    pub async fn handle(&self, command: DeleteTodo) -> Result<(), ApplicationError> {
        let key = codec::encode_key(&command.todo_id);

        self.store.delete(&key).await?;

        tracing::info!(todo_id = %command.todo_id, "Todo deleted");

        Ok(())
    }
}
