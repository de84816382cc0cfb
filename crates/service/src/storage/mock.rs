//! Store doubles for exercising failure paths.

use async_trait::async_trait;
use serde_json::Value;

use super::{KeyValueStore, ScanFilter, StoreError};

/// A store whose every call fails, as a managed store does when it cannot be
/// reached.
pub struct UnavailableStore {
    message: String,
}

impl UnavailableStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Unavailable(self.message.clone()))
    }
}

#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn put(&self, _key: &str, _item: Value) -> Result<(), StoreError> {
        self.fail()
    }

    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        self.fail()
    }

    async fn scan(&self, _filter: Option<&ScanFilter>) -> Result<Vec<Value>, StoreError> {
        self.fail()
    }
}
