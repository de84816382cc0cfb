use std::sync::Arc;

use async_trait::async_trait;
use models::{ApiRecordItem, RecordKey};
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::ServiceError;
use crate::storage::{KeyValueStore, ScanFilter};

/// Data-boundary operations on the records table.
#[async_trait]
pub trait ApiRecordsGateway: Send + Sync {
    async fn put(&self, item: ApiRecordItem) -> Result<(), ServiceError>;
    async fn get(&self, key: &RecordKey) -> Result<ApiRecordItem, ServiceError>;
    async fn scan_all(&self) -> Result<Vec<ApiRecordItem>, ServiceError>;
    /// Whether any stored record carries this repository id.
    async fn exists_by_github_id(&self, github_id: u64) -> Result<bool, ServiceError>;
}

/// Gateway over any [`KeyValueStore`]. The store is injected at composition
/// time; the table name only labels log events.
pub struct KvApiRecordsGateway {
    store: Arc<dyn KeyValueStore>,
    table_name: String,
}

impl KvApiRecordsGateway {
    pub fn new(store: Arc<dyn KeyValueStore>, table_name: impl Into<String>) -> Self {
        Self { store, table_name: table_name.into() }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn decode(value: Value) -> Result<ApiRecordItem, ServiceError> {
        serde_json::from_value(value).map_err(|e| ServiceError::Other(format!("stored record is unreadable: {e}")))
    }
}

#[async_trait]
impl ApiRecordsGateway for KvApiRecordsGateway {
    async fn put(&self, item: ApiRecordItem) -> Result<(), ServiceError> {
        let value = serde_json::to_value(&item)?;
        if let Err(e) = self.store.put(&item.id, value).await {
            error!(table = %self.table_name, id = %item.id, github_id = item.github_id, error = %e, "problem creating an API record");
            return Err(e.into());
        }
        debug!(table = %self.table_name, id = %item.id, "api record stored");
        Ok(())
    }

    async fn get(&self, key: &RecordKey) -> Result<ApiRecordItem, ServiceError> {
        let found = self.store.get(&key.id).await.map_err(|e| {
            error!(table = %self.table_name, id = %key.id, error = %e, "problem reading an API record");
            ServiceError::from(e)
        })?;
        match found {
            Some(value) => Self::decode(value),
            None => Err(ServiceError::not_found(&key.id)),
        }
    }

    async fn scan_all(&self) -> Result<Vec<ApiRecordItem>, ServiceError> {
        let items = self.store.scan(None).await.map_err(|e| {
            error!(table = %self.table_name, error = %e, "problem scanning API records");
            ServiceError::from(e)
        })?;
        items.into_iter().map(Self::decode).collect()
    }

    async fn exists_by_github_id(&self, github_id: u64) -> Result<bool, ServiceError> {
        let filter = ScanFilter::eq(ApiRecordItem::GITHUB_ID_ATTRIBUTE, github_id);
        let hits = self.store.scan(Some(&filter)).await.map_err(|e| {
            error!(table = %self.table_name, github_id, error = %e, "problem checking for an existing API record");
            ServiceError::from(e)
        })?;
        Ok(!hits.is_empty())
    }
}
