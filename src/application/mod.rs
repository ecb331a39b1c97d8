//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TodoStore）
//! - codec: Todo 与存储属性之间的编解码
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod codec;
pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreateTodoHandler, DeleteTodoHandler, UpdateTodoHandler},
    CreateTodo, DeleteTodo, TodoChanges, UpdateTodo,
};

pub use error::ApplicationError;

pub use ports::{AttributeUpdates, AttributeValue, Item, StoreError, TodoStorePort};

pub use queries::{
    handlers::{GetTodoHandler, ListTodosHandler},
    GetTodo, ListTodos,
};
