//! Storage abstractions for service layer
//!
//! [`KeyValueStore`] is the only thing the gateway knows about persistence:
//! put by key, get by key, scan with an optional equality filter. Items are
//! plain JSON objects.

pub mod json_map_store;
pub mod memory;
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("{0}")]
    Unavailable(String),
}

/// Equality filter on one top-level attribute of an item.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanFilter {
    pub attribute: String,
    pub value: Value,
}

impl ScanFilter {
    pub fn eq(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { attribute: attribute.into(), value: value.into() }
    }

    pub fn matches(&self, item: &Value) -> bool {
        item.get(&self.attribute) == Some(&self.value)
    }
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Insert or replace the item stored under `key`.
    async fn put(&self, key: &str, item: Value) -> Result<(), StoreError>;
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    /// Every item, or only those matching `filter`.
    async fn scan(&self, filter: Option<&ScanFilter>) -> Result<Vec<Value>, StoreError>;
}
