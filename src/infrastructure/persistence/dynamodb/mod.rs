//! DynamoDB Store
//!
//! 基于 `aws-sdk-dynamodb` 的 TodoStore 实现

mod client;
mod conversions;
mod todo_store;

pub use client::create_client;
pub use todo_store::DynamoTodoStore;
