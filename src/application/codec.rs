//! Entity Codec
//!
//! Todo 与存储属性之间的双向映射，以及分区键的构造
//!
//! 属性布局:
//! - `PK`          S     `TODO#{id}`
//! - `Description` S
//! - `Complete`    BOOL
//! - `CreatedAt`   N     毫秒时间戳

use thiserror::Error;

use crate::application::ports::{AttributeUpdates, AttributeValue, Item};
use crate::domain::{Todo, TodoId};

/// 分区键属性名
pub const PARTITION_KEY: &str = "PK";
/// 分区键前缀
pub const KEY_PREFIX: &str = "TODO#";

pub const ATTR_DESCRIPTION: &str = "Description";
pub const ATTR_COMPLETE: &str = "Complete";
pub const ATTR_CREATED_AT: &str = "CreatedAt";

/// 解码错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("attribute {name} has type {found}, expected {expected}")]
    InvalidType {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("partition key without TODO# prefix: {0}")]
    InvalidKey(String),

    #[error("attribute {name} is not a number: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

/// 由 id 构造分区键
pub fn encode_key(id: &TodoId) -> String {
    format!("{}{}", KEY_PREFIX, id)
}

/// 编码新建记录
///
/// 只取调用方的描述；id、完成状态与创建时间都在这里重新生成
pub fn encode_for_create(description: &str) -> (Todo, Item) {
    let todo = Todo::new(description);
    let item = encode(&todo);
    (todo, item)
}

/// 编码完整记录
pub fn encode(todo: &Todo) -> Item {
    let mut item = Item::with_capacity(4);
    item.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(encode_key(&todo.id)),
    );
    item.insert(
        ATTR_DESCRIPTION.to_string(),
        AttributeValue::S(todo.description.clone()),
    );
    item.insert(ATTR_COMPLETE.to_string(), AttributeValue::Bool(todo.complete));
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::N(todo.created_at.to_string()),
    );
    item
}

/// 编码更新：只包含调用方给出的 description / complete
pub fn encode_for_update(description: Option<&str>, complete: Option<bool>) -> AttributeUpdates {
    let mut updates = AttributeUpdates::with_capacity(2);
    if let Some(description) = description {
        updates.insert(
            ATTR_DESCRIPTION.to_string(),
            AttributeValue::S(description.to_string()),
        );
    }
    if let Some(complete) = complete {
        updates.insert(ATTR_COMPLETE.to_string(), AttributeValue::Bool(complete));
    }
    updates
}

/// 解码一条记录
pub fn decode(item: &Item) -> Result<Todo, DecodeError> {
    let key = get_string(item, PARTITION_KEY)?;
    let id = key
        .strip_prefix(KEY_PREFIX)
        .ok_or_else(|| DecodeError::InvalidKey(key.to_string()))?;

    let description = get_string(item, ATTR_DESCRIPTION)?;

    let complete = match require(item, ATTR_COMPLETE)? {
        AttributeValue::Bool(b) => *b,
        other => return Err(invalid_type(ATTR_COMPLETE, "BOOL", other)),
    };

    let created_at = match require(item, ATTR_CREATED_AT)? {
        AttributeValue::N(n) => n.parse::<i64>().map_err(|_| DecodeError::InvalidNumber {
            name: ATTR_CREATED_AT,
            value: n.clone(),
        })?,
        other => return Err(invalid_type(ATTR_CREATED_AT, "N", other)),
    };

    Ok(Todo {
        id: TodoId::new(id),
        description: description.to_string(),
        complete,
        created_at,
    })
}

fn require<'a>(item: &'a Item, name: &'static str) -> Result<&'a AttributeValue, DecodeError> {
    item.get(name).ok_or(DecodeError::MissingAttribute(name))
}

fn get_string<'a>(item: &'a Item, name: &'static str) -> Result<&'a str, DecodeError> {
    match require(item, name)? {
        AttributeValue::S(s) => Ok(s),
        other => Err(invalid_type(name, "S", other)),
    }
}

fn invalid_type(name: &'static str, expected: &'static str, found: &AttributeValue) -> DecodeError {
    DecodeError::InvalidType {
        name,
        expected,
        found: found.type_name(),
    }
}
