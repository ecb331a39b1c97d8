//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Todo Context: 待办事项

pub mod todo;

pub use todo::{Todo, TodoId};
