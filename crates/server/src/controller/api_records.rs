use std::sync::Arc;

use axum::http::StatusCode;
use models::{ApiRecordInput, GetApiInput};
use serde_json::Value;
use service::errors::ServiceError;
use service::gateway::ApiRecordsGateway;
use service::mappers::PresentationDomainMapper;
use service::usecase::ApiRecordUseCase;
use tracing::info;

use super::endpoint::{base_endpoint, Endpoint};
use super::event::{Context, Event, Reply};
use super::validation::{create_rules, get_rules};

/// Builds the record endpoints around one shared use case.
pub struct ApiRecordsController<G: ApiRecordsGateway> {
    usecase: Arc<ApiRecordUseCase<G>>,
    mapper: PresentationDomainMapper,
}

impl<G: ApiRecordsGateway + 'static> ApiRecordsController<G> {
    pub fn new(usecase: Arc<ApiRecordUseCase<G>>, mapper: PresentationDomainMapper) -> Self {
        Self { usecase, mapper }
    }

    /// Register a record. 201 with no body on success.
    pub fn create(&self) -> Endpoint {
        let usecase = Arc::clone(&self.usecase);
        let mapper = self.mapper;
        base_endpoint(create_rules(), move |event: Event, _ctx: Context| {
            let usecase = Arc::clone(&usecase);
            async move {
                let input: ApiRecordInput = event.payload()?;
                let record = mapper.to_domain(input)?;
                let id = usecase.create(record).await?;
                info!(%id, "createAPI done");
                Ok::<_, ServiceError>(Reply::status(StatusCode::CREATED))
            }
        })
    }

    /// Read one record. The id comes from the same merged input the rules
    /// checked, so a path `id` and a body `id` behave alike.
    pub fn get(&self) -> Endpoint {
        let usecase = Arc::clone(&self.usecase);
        let mapper = self.mapper;
        base_endpoint(get_rules(), move |event: Event, _ctx: Context| {
            let usecase = Arc::clone(&usecase);
            async move {
                let input = event.merged_input().map_err(ServiceError::MalformedPayload)?;
                let input: GetApiInput = serde_json::from_value(Value::Object(input))
                    .map_err(|e| ServiceError::MalformedPayload(format!("id: {e}")))?;
                let id = mapper.to_domain_get(input);
                let record = usecase.retrieve(&id).await?;
                Reply::json(StatusCode::OK, &mapper.to_presentation(record))
            }
        })
    }

    /// Summaries of every record.
    pub fn list_apis(&self) -> Endpoint {
        let usecase = Arc::clone(&self.usecase);
        base_endpoint(vec![], move |_event: Event, _ctx: Context| {
            let usecase = Arc::clone(&usecase);
            async move {
                let summaries = usecase.list_all().await?;
                Reply::json(StatusCode::OK, &summaries)
            }
        })
    }

    /// Partial update is declared but not offered.
    pub fn patch(&self) -> Endpoint {
        base_endpoint(vec![], |_event: Event, _ctx: Context| async {
            Ok::<_, ServiceError>(Reply::status(StatusCode::NOT_IMPLEMENTED))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::validation::{
        BASE_URL_REQUIRED, GITHUB_ID_REQUIRED, GITHUB_URL_REQUIRED, NAME_REQUIRED,
    };
    use serde_json::json;
    use service::gateway::KvApiRecordsGateway;
    use service::mappers::DomainDataMapper;
    use service::storage::memory::MemoryStore;
    use service::storage::mock::UnavailableStore;
    use service::storage::KeyValueStore;

    fn controller(store: Arc<dyn KeyValueStore>) -> ApiRecordsController<KvApiRecordsGateway> {
        let gateway = Arc::new(KvApiRecordsGateway::new(store, "api-records"));
        let usecase = Arc::new(ApiRecordUseCase::new(gateway, DomainDataMapper::new()));
        ApiRecordsController::new(usecase, PresentationDomainMapper::new())
    }

    fn foo() -> Value {
        json!({
            "name": "Foo",
            "githubId": 12345,
            "baseUrl": {"staging": "http://x"},
            "githubUrl": "http://gh/x"
        })
    }

    #[tokio::test]
    async fn create_then_read_back() -> anyhow::Result<()> {
        let store = Arc::new(MemoryStore::new());
        let c = controller(store.clone());

        let resp = c.create().call(Event::new().with_body_text(foo().to_string()), Context::default()).await;
        assert_eq!(resp.status_code, 201);
        assert_eq!(resp.body, None);
        assert_eq!(store.len().await, 1);

        let list = c.list_apis().call(Event::new(), Context::default()).await;
        assert_eq!(list.status_code, 200);
        let summaries = list.json_body().unwrap();
        let id = summaries[0]["id"].as_str().unwrap().to_string();
        assert_eq!(summaries, json!([{"id": id, "githubId": 12345, "name": "Foo"}]));

        let got = c.get().call(Event::new().with_path_param("id", &id), Context::default()).await;
        assert_eq!(got.status_code, 200);
        let body = got.json_body().unwrap();
        assert_eq!(body["id"], json!(id));
        assert_eq!(body["baseUrl"], json!({"staging": "http://x"}));
        assert_eq!(body["dependencies"], json!({"apis": [], "scripts": [], "databases": []}));
        Ok(())
    }

    #[tokio::test]
    async fn second_create_for_same_repository_conflicts() {
        let store = Arc::new(MemoryStore::new());
        let c = controller(store.clone());
        let event = Event::new().with_body_text(foo().to_string());

        assert_eq!(c.create().call(event.clone(), Context::default()).await.status_code, 201);
        let resp = c.create().call(event, Context::default()).await;

        assert_eq!(resp.status_code, 409);
        let msg = "The project from this repository (githubId: 12345) already exists!";
        assert_eq!(resp.json_body().unwrap(), json!({"userMessage": msg, "errorMessage": msg}));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn create_cannot_overwrite_another_record_by_id() {
        let store = Arc::new(MemoryStore::new());
        let c = controller(store.clone());
        let mut first = foo();
        first["id"] = json!("victim");
        first["githubId"] = json!(1);
        let mut second = first.clone();
        second["githubId"] = json!(2);
        second["name"] = json!("Bar");

        assert_eq!(c.create().call(Event::new().with_json(first), Context::default()).await.status_code, 201);
        let resp = c.create().call(Event::new().with_json(second), Context::default()).await;

        assert_eq!(resp.status_code, 409);
        let msg = "A record with id: victim already exists!";
        assert_eq!(resp.json_body().unwrap(), json!({"userMessage": msg, "errorMessage": msg}));
        assert_eq!(store.len().await, 1);

        let got = c.get().call(Event::new().with_path_param("id", "victim"), Context::default()).await;
        assert_eq!(got.status_code, 200);
        let body = got.json_body().unwrap();
        assert_eq!(body["githubId"], 1);
        assert_eq!(body["name"], "Foo");
    }

    #[tokio::test]
    async fn empty_body_reports_every_create_rule() {
        let c = controller(Arc::new(MemoryStore::new()));
        let resp = c.create().call(Event::new(), Context::default()).await;
        assert_eq!(resp.status_code, 400);
        assert_eq!(
            resp.json_body().unwrap(),
            json!({"validationErrors": [NAME_REQUIRED, GITHUB_ID_REQUIRED, BASE_URL_REQUIRED, GITHUB_URL_REQUIRED]})
        );
    }

    #[tokio::test]
    async fn textual_github_id_is_the_only_failure() {
        let store = Arc::new(MemoryStore::new());
        let c = controller(store.clone());
        let mut body = foo();
        body["githubId"] = json!("1234567890");

        let resp = c.create().call(Event::new().with_json(body), Context::default()).await;

        assert_eq!(resp.status_code, 400);
        assert_eq!(resp.json_body().unwrap(), json!({"validationErrors": [GITHUB_ID_REQUIRED]}));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_status_is_a_client_error() {
        let c = controller(Arc::new(MemoryStore::new()));
        let mut body = foo();
        body["status"] = json!("RETIRED");
        let resp = c.create().call(Event::new().with_json(body), Context::default()).await;
        assert_eq!(resp.status_code, 400);
    }

    #[tokio::test]
    async fn unknown_id_is_404_naming_the_id() {
        let c = controller(Arc::new(MemoryStore::new()));
        let resp = c.get().call(Event::new().with_path_param("id", "abc"), Context::default()).await;
        assert_eq!(resp.status_code, 404);
        let body = resp.json_body().unwrap();
        assert_eq!(body["userMessage"], "Record with id: abc was not found.");
        assert_eq!(body["errorMessage"], "Record with id: abc was not found.");
    }

    #[tokio::test]
    async fn get_reads_the_id_the_rules_checked() {
        let c = controller(Arc::new(MemoryStore::new()));
        let mut body = foo();
        body["id"] = json!("abc");
        assert_eq!(c.create().call(Event::new().with_json(body), Context::default()).await.status_code, 201);

        // no path parameter, id only in the body
        let resp = c.get().call(Event::new().with_json(json!({"id": "abc"})), Context::default()).await;
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.json_body().unwrap()["id"], "abc");

        // body wins over the path, as in validation
        let resp = c
            .get()
            .call(Event::new().with_path_param("id", "abc").with_json(json!({"id": "zzz"})), Context::default())
            .await;
        assert_eq!(resp.status_code, 404);
        assert_eq!(resp.json_body().unwrap()["errorMessage"], "Record with id: zzz was not found.");
    }

    #[tokio::test]
    async fn get_without_id_fails_validation() {
        let c = controller(Arc::new(MemoryStore::new()));
        let resp = c.get().call(Event::new(), Context::default()).await;
        assert_eq!(resp.status_code, 400);
        assert_eq!(resp.json_body().unwrap(), json!({"validationErrors": ["Please provide a non-empty API id."]}));
    }

    #[tokio::test]
    async fn empty_table_lists_as_empty_array() {
        let c = controller(Arc::new(MemoryStore::new()));
        let resp = c.list_apis().call(Event::new(), Context::default()).await;
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn store_outage_is_503() {
        let c = controller(Arc::new(UnavailableStore::new("table offline")));
        let resp = c.list_apis().call(Event::new(), Context::default()).await;
        assert_eq!(resp.status_code, 503);
        assert_eq!(resp.json_body().unwrap()["userMessage"], "Store client error. Please try again later.");

        let resp = c.create().call(Event::new().with_json(foo()), Context::default()).await;
        assert_eq!(resp.status_code, 503);
    }

    #[tokio::test]
    async fn patch_is_not_implemented() {
        let c = controller(Arc::new(MemoryStore::new()));
        let resp = c.patch().call(Event::new().with_path_param("id", "abc"), Context::default()).await;
        assert_eq!(resp.status_code, 501);
        assert_eq!(resp.body, None);
    }
}
