//! HTTP Routes
//!
//! API Endpoints:
//! - /ping          GET     健康检查
//! - /todos         GET     列出所有待办
//! - /todos         POST    创建待办
//! - /todos/{id}    GET     获取待办
//! - /todos/{id}    PUT     更新 description / complete
//! - /todos/{id}    DELETE  删除待办

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(todo_routes())
}

/// Todo 路由
fn todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:todo_id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
}
