//! In-Memory Store
//!
//! 本地运行与测试用的内存存储

mod todo_store;

pub use todo_store::InMemoryTodoStore;
