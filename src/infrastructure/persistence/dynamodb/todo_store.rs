//! DynamoDB Todo Store

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeAction, AttributeValue as DynamoValue, AttributeValueUpdate};
use aws_sdk_dynamodb::Client;

use super::conversions::{from_dynamo_item, to_dynamo, to_dynamo_item};
use crate::application::codec::PARTITION_KEY;
use crate::application::ports::{AttributeUpdates, Item, StoreError, TodoStorePort};

/// DynamoDB Todo Store
///
/// 表以字符串分区键 `PK` 为主键，无排序键
pub struct DynamoTodoStore {
    client: Client,
    table_name: String,
}

impl DynamoTodoStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn key(key: &str) -> (String, DynamoValue) {
        (PARTITION_KEY.to_string(), DynamoValue::S(key.to_string()))
    }
}

fn request_error<E>(err: E) -> StoreError
where
    E: std::error::Error,
{
    StoreError::Request(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl TodoStorePort for DynamoTodoStore {
    async fn get(&self, key: &str) -> Result<Option<Item>, StoreError> {
        let (name, value) = Self::key(key);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(name, value)
            .send()
            .await
            .map_err(request_error)?;

        Ok(output.item.map(from_dynamo_item))
    }

    async fn put(&self, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_dynamo_item(item)))
            .send()
            .await
            .map_err(request_error)?;

        Ok(())
    }

    async fn update(&self, key: &str, updates: AttributeUpdates) -> Result<(), StoreError> {
        let (name, value) = Self::key(key);
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(name, value);

        for (attribute, value) in updates {
            request = request.attribute_updates(
                attribute,
                AttributeValueUpdate::builder()
                    .value(to_dynamo(value))
                    .action(AttributeAction::Put)
                    .build(),
            );
        }

        request.send().await.map_err(request_error)?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let (name, value) = Self::key(key);
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(name, value)
            .send()
            .await
            .map_err(request_error)?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send();

        while let Some(item) = pages.next().await {
            items.push(from_dynamo_item(item.map_err(request_error)?));
        }

        tracing::debug!(count = items.len(), table = %self.table_name, "Scan complete");

        Ok(items)
    }
}
