use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{KeyValueStore, ScanFilter, StoreError};

/// Process-local store. Scans return items in key order.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn put(&self, key: &str, item: Value) -> Result<(), StoreError> {
        self.inner.write().await.insert(key.to_string(), item);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn scan(&self, filter: Option<&ScanFilter>) -> Result<Vec<Value>, StoreError> {
        let map = self.inner.read().await;
        Ok(map
            .values()
            .filter(|item| filter.map_or(true, |f| f.matches(item)))
            .cloned()
            .collect())
    }
}
