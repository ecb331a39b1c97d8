//! Todo Context - 待办事项限界上下文
//!
//! 职责:
//! - Todo 实体与标识
//! - 创建时生成 id / createdAt

mod entity;
mod value_objects;

pub use entity::Todo;
pub use value_objects::TodoId;
