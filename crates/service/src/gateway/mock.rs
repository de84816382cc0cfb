//! In-memory gateway double that records how it was called.

use async_trait::async_trait;
use models::{ApiRecordItem, RecordKey};
use tokio::sync::Mutex;

use super::ApiRecordsGateway;
use crate::errors::ServiceError;

#[derive(Default)]
pub struct MockApiRecordsGateway {
    items: Mutex<Vec<ApiRecordItem>>,
    put_calls: Mutex<usize>,
    fail_with: Option<ServiceError>,
}

impl MockApiRecordsGateway {
    pub fn with_items(items: Vec<ApiRecordItem>) -> Self {
        Self { items: Mutex::new(items), ..Default::default() }
    }

    /// A gateway whose every call returns `err`.
    pub fn failing(err: ServiceError) -> Self {
        Self { fail_with: Some(err), ..Default::default() }
    }

    pub async fn items(&self) -> Vec<ApiRecordItem> {
        self.items.lock().await.clone()
    }

    pub async fn put_calls(&self) -> usize {
        *self.put_calls.lock().await
    }

    fn check(&self) -> Result<(), ServiceError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ApiRecordsGateway for MockApiRecordsGateway {
    async fn put(&self, item: ApiRecordItem) -> Result<(), ServiceError> {
        *self.put_calls.lock().await += 1;
        self.check()?;
        let mut items = self.items.lock().await;
        items.retain(|i| i.id != item.id);
        items.push(item);
        Ok(())
    }

    async fn get(&self, key: &RecordKey) -> Result<ApiRecordItem, ServiceError> {
        self.check()?;
        let items = self.items.lock().await;
        items.iter().find(|i| i.id == key.id).cloned().ok_or_else(|| ServiceError::not_found(&key.id))
    }

    async fn scan_all(&self) -> Result<Vec<ApiRecordItem>, ServiceError> {
        self.check()?;
        Ok(self.items.lock().await.clone())
    }

    async fn exists_by_github_id(&self, github_id: u64) -> Result<bool, ServiceError> {
        self.check()?;
        Ok(self.items.lock().await.iter().any(|i| i.github_id == github_id))
    }
}
