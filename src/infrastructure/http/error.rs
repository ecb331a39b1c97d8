//! HTTP Error Handling
//!
//! 两类错误：
//! - 单条查询未找到 -> 404 `{error}`，不按错误级别记录
//! - 存储失败 -> 500，每个端点固定文案，底层原因只写日志

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// 错误响应体使用的字段名
///
/// 读/创建端点返回 `{error}`，更新/删除端点返回 `{message}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    Error,
    Message,
}

impl ErrorField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorField::Error => "error",
            ErrorField::Message => "message",
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    Internal {
        field: ErrorField,
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// 500 `{error: message}`
    pub fn internal(message: &'static str, detail: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            field: ErrorField::Error,
            message,
            detail: detail.to_string(),
        }
    }

    /// 500 `{message: message}`
    pub fn internal_message(message: &'static str, detail: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            field: ErrorField::Message,
            message,
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn body(field: ErrorField, message: &str) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(field.as_str().to_string(), Value::String(message.to_string()));
    Value::Object(map)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                body(ErrorField::Error, msg)
            }
            ApiError::Internal {
                field,
                message,
                detail,
            } => {
                tracing::error!(status = status.as_u16(), error = %detail, "{}", message);
                body(*field, message)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let response = ApiError::NotFound("Todo not found.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Todo not found." })
        );
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let response =
            ApiError::internal_message("Error deleting todo.", "timeout").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Error deleting todo." })
        );
    }
}
