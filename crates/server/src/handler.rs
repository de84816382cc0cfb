//! Composition root: one store, one gateway, one use case, four endpoints.

use std::sync::Arc;

use service::gateway::KvApiRecordsGateway;
use service::mappers::{DomainDataMapper, PresentationDomainMapper};
use service::storage::KeyValueStore;
use service::usecase::ApiRecordUseCase;

use crate::controller::{ApiRecordsController, Endpoint};

/// The exposed entry points. Built once per process and shared across requests.
#[derive(Clone)]
pub struct Handlers {
    pub create_api: Endpoint,
    pub get_api: Endpoint,
    pub list_apis: Endpoint,
    pub patch_api: Endpoint,
}

impl Handlers {
    pub fn new(store: Arc<dyn KeyValueStore>, table_name: impl Into<String>) -> Self {
        let gateway = Arc::new(KvApiRecordsGateway::new(store, table_name));
        let usecase = Arc::new(ApiRecordUseCase::new(gateway, DomainDataMapper::new()));
        let controller = ApiRecordsController::new(usecase, PresentationDomainMapper::new());
        Self {
            create_api: controller.create(),
            get_api: controller.get(),
            list_apis: controller.list_apis(),
            patch_api: controller.patch(),
        }
    }
}
