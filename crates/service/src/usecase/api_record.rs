use std::sync::Arc;

use models::{ApiRecord, ApiRecordSummary};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::gateway::ApiRecordsGateway;
use crate::mappers::DomainDataMapper;

/// Business rules for API records.
///
/// A repository (`github_id`) is registered once, and a caller-supplied id
/// never replaces a stored record. The checks and the write are separate
/// store calls, so two concurrent creates can both pass the checks.
pub struct ApiRecordUseCase<G: ApiRecordsGateway> {
    gateway: Arc<G>,
    mapper: DomainDataMapper,
}

impl<G: ApiRecordsGateway> ApiRecordUseCase<G> {
    pub fn new(gateway: Arc<G>, mapper: DomainDataMapper) -> Self {
        Self { gateway, mapper }
    }

    /// Register a new record and return its id.
    ///
    /// # Examples
    /// ```
    /// use service::gateway::mock::MockApiRecordsGateway;
    /// use service::mappers::DomainDataMapper;
    /// use service::usecase::ApiRecordUseCase;
    /// use models::ApiRecord;
    /// use std::sync::Arc;
    /// let gw = Arc::new(MockApiRecordsGateway::default());
    /// let uc = ApiRecordUseCase::new(gw.clone(), DomainDataMapper::new());
    /// let record = ApiRecord { github_id: 12345, name: "Foo".into(), ..Default::default() };
    /// let id = tokio_test::block_on(uc.create(record)).unwrap();
    /// assert_eq!(tokio_test::block_on(gw.items())[0].id, id);
    /// ```
    #[instrument(skip(self, record), fields(github_id = record.github_id, name = %record.name))]
    pub async fn create(&self, record: ApiRecord) -> Result<String, ServiceError> {
        if self.gateway.exists_by_github_id(record.github_id).await? {
            info!("api record rejected: repository already registered");
            return Err(ServiceError::duplicate(record.github_id));
        }

        if let Some(id) = record.id.as_deref() {
            match self.gateway.get(&self.mapper.to_data_get(id)).await {
                Ok(_) => {
                    info!(%id, "api record rejected: id already taken");
                    return Err(ServiceError::duplicate_id(id));
                }
                Err(ServiceError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }

        let mut record = record;
        let id = record.id.get_or_insert_with(|| Uuid::new_v4().to_string()).clone();
        let item = self.mapper.to_data(record)?;
        self.gateway.put(item).await?;
        info!(%id, "api_record_created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn retrieve(&self, id: &str) -> Result<ApiRecord, ServiceError> {
        let key = self.mapper.to_data_get(id);
        let item = self.gateway.get(&key).await?;
        Ok(self.mapper.to_domain(item))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<ApiRecordSummary>, ServiceError> {
        let items = self.gateway.scan_all().await?;
        info!(count = items.len(), "listed api records");
        Ok(items.into_iter().map(|item| self.mapper.to_summary(item)).collect())
    }
}
