//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::codec::DecodeError;
use crate::application::ports::StoreError;
use crate::domain::TodoId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: TodoId,
    },

    /// 存储请求失败
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// 记录无法解码
    #[error("Decode error: {0}")]
    DecodeError(#[from] DecodeError),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: TodoId) -> Self {
        Self::NotFound { resource_type, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
