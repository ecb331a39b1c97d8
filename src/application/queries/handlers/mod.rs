//! Query Handlers 实现

mod todo_handlers;

pub use todo_handlers::*;
