//! Persistence Layer - 数据持久化
//!
//! DynamoDB 与内存两种 TodoStore 实现

pub mod dynamodb;
pub mod memory;

pub use self::dynamodb::DynamoTodoStore;
pub use self::memory::InMemoryTodoStore;
