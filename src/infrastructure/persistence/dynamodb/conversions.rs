//! 属性值转换
//!
//! 端口的 AttributeValue 与 SDK AttributeValue 之间的映射

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue as DynamoValue;

use crate::application::ports::{AttributeValue, Item};

pub(super) fn to_dynamo(value: AttributeValue) -> DynamoValue {
    match value {
        AttributeValue::S(s) => DynamoValue::S(s),
        AttributeValue::N(n) => DynamoValue::N(n),
        AttributeValue::Bool(b) => DynamoValue::Bool(b),
    }
}

pub(super) fn to_dynamo_item(item: Item) -> HashMap<String, DynamoValue> {
    item.into_iter().map(|(k, v)| (k, to_dynamo(v))).collect()
}

/// SDK 记录转端口记录
///
/// 不支持的属性类型直接丢弃，是否缺字段由解码阶段判断
pub(super) fn from_dynamo_item(item: HashMap<String, DynamoValue>) -> Item {
    item.into_iter()
        .filter_map(|(name, value)| match value {
            DynamoValue::S(s) => Some((name, AttributeValue::S(s))),
            DynamoValue::N(n) => Some((name, AttributeValue::N(n))),
            DynamoValue::Bool(b) => Some((name, AttributeValue::Bool(b))),
            _ => {
                tracing::trace!(attribute = %name, "Dropping unsupported attribute type");
                None
            }
        })
        .collect()
}
