//! Todo HTTP Handlers
//!
//! 每个端点的失败文案固定；请求体解析失败与存储失败对调用方不做区分

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateTodo, DeleteTodo, GetTodo, ListTodos, TodoChanges, UpdateTodo};
use crate::domain::{Todo, TodoId};
use crate::infrastructure::http::dto::{
    CreateTodoRequest, StatusResponse, TodoListResponse, TodoResponse, UpdateTodoRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const LIST_FAILED: &str = "Error fetching todos.";
const GET_FAILED: &str = "Error fetching todo.";
const NOT_FOUND: &str = "Todo not found.";
const CREATE_FAILED: &str = "Error creating todo.";
const UPDATE_FAILED: &str = "Error updating todo.";
const DELETE_FAILED: &str = "Error deleting todo.";

/// 获取待办列表
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = state
        .list_todos_handler
        .handle(ListTodos)
        .await
        .map_err(|e| ApiError::internal(LIST_FAILED, e))?;

    Ok(Json(TodoListResponse { todos }))
}

/// 获取待办详情
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<String>,
) -> Result<Json<TodoResponse<Todo>>, ApiError> {
    let query = GetTodo {
        todo_id: TodoId::from(todo_id),
    };

    match state.get_todo_handler.handle(query).await {
        Ok(todo) => Ok(Json(TodoResponse::new(todo))),
        Err(e) if e.is_not_found() => Err(ApiError::NotFound(NOT_FOUND)),
        Err(e) => Err(ApiError::internal(GET_FAILED, e)),
    }
}

/// 创建待办
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse<Todo>>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::internal(CREATE_FAILED, e))?;

    let command = CreateTodo {
        description: req.description,
    };

    let todo = state
        .create_todo_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::internal(CREATE_FAILED, e))?;

    Ok((StatusCode::CREATED, Json(TodoResponse::new(todo))))
}

/// 更新待办，回显请求内容
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse<TodoChanges>>, ApiError> {
    let Json(changes) = payload.map_err(|e| ApiError::internal_message(UPDATE_FAILED, e))?;

    let command = UpdateTodo {
        todo_id: TodoId::from(todo_id),
        changes,
    };

    let echoed = state
        .update_todo_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::internal_message(UPDATE_FAILED, e))?;

    Ok(Json(TodoResponse::new(echoed)))
}

/// 删除待办（幂等）
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(todo_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let command = DeleteTodo {
        todo_id: TodoId::from(todo_id),
    };

    state
        .delete_todo_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::internal_message(DELETE_FAILED, e))?;

    Ok(Json(StatusResponse::success()))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request},
        Router,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use super::*;
    use crate::application::{AttributeUpdates, Item, StoreError, TodoStorePort};
    use crate::infrastructure::http::server::build_router;
    use crate::infrastructure::persistence::memory::InMemoryTodoStore;

    struct UnreachableStore;

    #[async_trait]
    impl TodoStorePort for UnreachableStore {
        async fn get(&self, _key: &str) -> Result<Option<Item>, StoreError> {
            Err(StoreError::Request("timed out".to_string()))
        }

        async fn put(&self, _item: Item) -> Result<(), StoreError> {
            Err(StoreError::Request("timed out".to_string()))
        }

        async fn update(&self, _key: &str, _updates: AttributeUpdates) -> Result<(), StoreError> {
            Err(StoreError::Request("timed out".to_string()))
        }

        async fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Request("timed out".to_string()))
        }

        async fn scan(&self) -> Result<Vec<Item>, StoreError> {
            Err(StoreError::Request("timed out".to_string()))
        }
    }

    fn app_with(store: Arc<dyn TodoStorePort>) -> Router {
        build_router(Arc::new(AppState::new(store)))
    }

    fn app() -> Router {
        app_with(Arc::new(InMemoryTodoStore::new()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_todo_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/todos",
            Some(json!({ "description": "buy milk" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created = body["todo"].clone();
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 36);
        assert_eq!(created["description"], "buy milk");
        assert_eq!(created["complete"], false);
        assert!(created["createdAt"].is_i64());

        let (status, body) = send(&app, Method::GET, &format!("/todos/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["todo"], created);

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/todos/{}", id),
            Some(json!({ "description": "buy oat milk", "complete": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["todo"]["description"], "buy oat milk");
        assert_eq!(body["todo"]["complete"], true);

        let (_, body) = send(&app, Method::GET, &format!("/todos/{}", id), None).await;
        assert_eq!(body["todo"]["description"], "buy oat milk");
        assert_eq!(body["todo"]["complete"], true);
        assert_eq!(body["todo"]["createdAt"], created["createdAt"]);

        let (status, body) = send(&app, Method::DELETE, &format!("/todos/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success" }));

        let (status, body) = send(&app, Method::GET, &format!("/todos/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Todo not found." }));
    }

    #[tokio::test]
    async fn test_create_ignores_caller_controlled_fields() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/todos",
            Some(json!({ "description": "x", "complete": true, "id": "caller-chosen", "createdAt": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["todo"]["complete"], false);
        assert_ne!(body["todo"]["id"], "caller-chosen");
        assert_ne!(body["todo"]["createdAt"], 1);
    }

    #[tokio::test]
    async fn test_list_returns_created_todos() {
        let app = app();
        for description in ["a", "b"] {
            send(
                &app,
                Method::POST,
                "/todos",
                Some(json!({ "description": description })),
            )
            .await;
        }

        let (status, body) = send(&app, Method::GET, "/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["todos"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let (status, body) = send(&app(), Method::DELETE, "/todos/never-created", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success" }));
    }

    #[tokio::test]
    async fn test_malformed_body_collapses_to_endpoint_failure() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/todos", Some(json!({ "complete": true }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Error creating todo." }));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/todos/abc",
            Some(json!({ "complete": "yes" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Error updating todo." }));
    }

    #[tokio::test]
    async fn test_store_failures_map_to_fixed_messages() {
        let app = app_with(Arc::new(UnreachableStore));

        let cases = [
            (Method::GET, "/todos", None, json!({ "error": "Error fetching todos." })),
            (Method::GET, "/todos/1", None, json!({ "error": "Error fetching todo." })),
            (
                Method::POST,
                "/todos",
                Some(json!({ "description": "x" })),
                json!({ "error": "Error creating todo." }),
            ),
            (
                Method::PUT,
                "/todos/1",
                Some(json!({ "description": "x", "complete": true })),
                json!({ "message": "Error updating todo." }),
            ),
            (Method::DELETE, "/todos/1", None, json!({ "message": "Error deleting todo." })),
        ];

        for (method, uri, body, expected) in cases {
            let (status, actual) = send(&app, method, uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
            assert_eq!(actual, expected);
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let (status, body) = send(&app(), Method::GET, "/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
