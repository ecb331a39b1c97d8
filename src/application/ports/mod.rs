//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod todo_store;

pub use todo_store::{AttributeUpdates, AttributeValue, Item, StoreError, TodoStorePort};
