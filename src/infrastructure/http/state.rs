//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateTodoHandler, DeleteTodoHandler, UpdateTodoHandler,
    // Query handlers
    GetTodoHandler, ListTodosHandler,
    // Ports
    TodoStorePort,
};

/// 应用状态
///
/// 所有 handler 共享启动时创建的同一个存储客户端
pub struct AppState {
    // ========== Ports ==========
    pub store: Arc<dyn TodoStorePort>,

    // ========== Command Handlers ==========
    pub create_todo_handler: CreateTodoHandler,
    pub update_todo_handler: UpdateTodoHandler,
    pub delete_todo_handler: DeleteTodoHandler,

    // ========== Query Handlers ==========
    pub get_todo_handler: GetTodoHandler,
    pub list_todos_handler: ListTodosHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn TodoStorePort>) -> Self {
        Self {
            store: store.clone(),

            create_todo_handler: CreateTodoHandler::new(store.clone()),
            update_todo_handler: UpdateTodoHandler::new(store.clone()),
            delete_todo_handler: DeleteTodoHandler::new(store.clone()),

            get_todo_handler: GetTodoHandler::new(store.clone()),
            list_todos_handler: ListTodosHandler::new(store),
        }
    }
}
