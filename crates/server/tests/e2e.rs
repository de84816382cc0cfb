use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::storage::memory::MemoryStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, Handlers};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let handlers = Arc::new(Handlers::new(Arc::new(MemoryStore::new()), "api-records-e2e"));
    let app: Router = routes::build_router(handlers, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn foo() -> Value {
    json!({
        "name": "Foo",
        "githubId": 12345,
        "baseUrl": {"staging": "http://x"},
        "githubUrl": "http://gh/x",
        "dependencies": {"scripts": [{"name": "nightly-sync", "description": "pulls upstream"}]},
        "status": "ACTIVE"
    })
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn register_list_and_read_a_record() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.post(format!("{}/apis", app.base_url)).json(&foo()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert!(res.text().await?.is_empty());

    let list: Value = client.get(format!("{}/apis", app.base_url)).send().await?.json().await?;
    let list = list.as_array().cloned().unwrap_or_default();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["githubId"], 12345);
    let id = list[0]["id"].as_str().unwrap_or_default().to_string();

    let res = client.get(format!("{}/apis/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let record: Value = res.json().await?;
    assert_eq!(record["name"], "Foo");
    assert_eq!(record["status"], "ACTIVE");
    assert_eq!(record["dependencies"]["scripts"][0]["name"], "nightly-sync");

    let res = client.post(format!("{}/apis", app.base_url)).json(&foo()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn client_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.post(format!("{}/apis", app.base_url)).body("").send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["validationErrors"].as_array().map(Vec::len), Some(4));

    let res = client.post(format!("{}/apis", app.base_url)).body("{oops").send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = client.get(format!("{}/apis/abc", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["errorMessage"], "Record with id: abc was not found.");

    let res = client.patch(format!("{}/apis/abc", app.base_url)).json(&json!({"name": "x"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_IMPLEMENTED);
    Ok(())
}
