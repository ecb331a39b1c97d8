//! In-Memory Todo Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::codec::PARTITION_KEY;
use crate::application::ports::{AttributeUpdates, AttributeValue, Item, StoreError, TodoStorePort};

/// 内存 Todo 存储
///
/// 语义与 DynamoDB 保持一致：put 整条覆盖，update 按属性覆盖且键不存在时创建，
/// delete 对不存在的键不报错
pub struct InMemoryTodoStore {
    items: DashMap<String, Item>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStorePort for InMemoryTodoStore {
    async fn get(&self, key: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.items.get(key).map(|item| item.clone()))
    }

    async fn put(&self, item: Item) -> Result<(), StoreError> {
        let key = match item.get(PARTITION_KEY) {
            Some(AttributeValue::S(key)) => key.clone(),
            _ => {
                return Err(StoreError::Serialization(format!(
                    "item is missing string attribute {}",
                    PARTITION_KEY
                )))
            }
        };
        self.items.insert(key.clone(), item);
        tracing::debug!(key = %key, "Item put");
        Ok(())
    }

    async fn update(&self, key: &str, updates: AttributeUpdates) -> Result<(), StoreError> {
        let mut entry = self.items.entry(key.to_string()).or_insert_with(|| {
            let mut item = Item::new();
            item.insert(PARTITION_KEY.to_string(), AttributeValue::S(key.to_string()));
            item
        });
        entry.extend(updates);
        tracing::debug!(key = %key, "Item updated");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        tracing::debug!(key = %key, "Item deleted");
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.iter().map(|entry| entry.value().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str) -> Item {
        let mut item = Item::new();
        item.insert(PARTITION_KEY.to_string(), AttributeValue::S(key.to_string()));
        item.insert("Description".to_string(), AttributeValue::S("x".to_string()));
        item.insert("CreatedAt".to_string(), AttributeValue::N("1".to_string()));
        item
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = InMemoryTodoStore::new();
        store.put(item("TODO#1")).await.unwrap();

        assert_eq!(store.get("TODO#1").await.unwrap(), Some(item("TODO#1")));

        store.delete("TODO#1").await.unwrap();
        assert!(store.get("TODO#1").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_only_given_attributes() {
        let store = InMemoryTodoStore::new();
        store.put(item("TODO#1")).await.unwrap();

        let mut updates = AttributeUpdates::new();
        updates.insert("Description".to_string(), AttributeValue::S("y".to_string()));
        store.update("TODO#1", updates).await.unwrap();

        let stored = store.get("TODO#1").await.unwrap().unwrap();
        assert_eq!(
            stored.get("Description"),
            Some(&AttributeValue::S("y".to_string()))
        );
        assert_eq!(
            stored.get("CreatedAt"),
            Some(&AttributeValue::N("1".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_missing_key_creates_partial_item() {
        let store = InMemoryTodoStore::new();
        let mut updates = AttributeUpdates::new();
        updates.insert("Complete".to_string(), AttributeValue::Bool(true));
        store.update("TODO#2", updates).await.unwrap();

        let stored = store.get("TODO#2").await.unwrap().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(
            stored.get(PARTITION_KEY),
            Some(&AttributeValue::S("TODO#2".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let store = InMemoryTodoStore::new();
        assert!(store.delete("TODO#nope").await.is_ok());
    }

    #[tokio::test]
    async fn test_put_without_key_fails() {
        let store = InMemoryTodoStore::new();
        assert!(store.put(Item::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_scan_returns_all() {
        let store = InMemoryTodoStore::new();
        store.put(item("TODO#1")).await.unwrap();
        store.put(item("TODO#2")).await.unwrap();
        assert_eq!(store.scan().await.unwrap().len(), 2);
    }
}
