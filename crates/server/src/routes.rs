use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response as HttpResponse},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::controller::{Context, Endpoint, Event, Response};
use crate::handler::Handlers;
use crate::openapi::ApiDoc;

type AppState = Arc<Handlers>;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post, path = "/apis", tag = "apis",
    request_body = crate::openapi::ApiRecordInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 409, description = "Repository already registered", body = crate::openapi::ErrorMessageDoc),
        (status = 503, description = "Store unavailable", body = crate::openapi::ErrorMessageDoc)
    )
)]
pub async fn create_api(State(handlers): State<AppState>, body: String) -> HttpResponse {
    dispatch(&handlers.create_api, Event::new().with_body_text(body), "createAPI").await
}

#[utoipa::path(
    get, path = "/apis", tag = "apis",
    responses(
        (status = 200, description = "Record summaries", body = [crate::openapi::ApiRecordSummaryDoc]),
        (status = 503, description = "Store unavailable", body = crate::openapi::ErrorMessageDoc)
    )
)]
pub async fn list_apis(State(handlers): State<AppState>) -> HttpResponse {
    dispatch(&handlers.list_apis, Event::new(), "listAPIs").await
}

#[utoipa::path(
    get, path = "/apis/{id}", tag = "apis",
    params(("id" = String, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record", body = crate::openapi::ApiRecordOutputDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorMessageDoc),
        (status = 503, description = "Store unavailable", body = crate::openapi::ErrorMessageDoc)
    )
)]
pub async fn get_api(State(handlers): State<AppState>, Path(id): Path<String>) -> HttpResponse {
    dispatch(&handlers.get_api, Event::new().with_path_param("id", id), "getAPI").await
}

#[utoipa::path(
    patch, path = "/apis/{id}", tag = "apis",
    params(("id" = String, Path, description = "Record id")),
    responses((status = 501, description = "Not Implemented"))
)]
pub async fn patch_api(State(handlers): State<AppState>, Path(id): Path<String>, body: String) -> HttpResponse {
    let event = Event::new().with_path_param("id", id).with_body_text(body);
    dispatch(&handlers.patch_api, event, "patchAPI").await
}

async fn dispatch(endpoint: &Endpoint, event: Event, function_name: &str) -> HttpResponse {
    into_http(endpoint.call(event, Context::new(function_name)).await)
}

fn into_http(resp: Response) -> HttpResponse {
    let status = StatusCode::from_u16(resp.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match resp.body {
        Some(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        None => status.into_response(),
    }
}

/// Build the application router: health, the OpenAPI document and the record routes.
pub fn build_router(handlers: Arc<Handlers>, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json));

    let apis = Router::new()
        .route("/apis", get(list_apis).post(create_api))
        .route("/apis/:id", get(get_api).patch(patch_api))
        .with_state(handlers);

    public
        .merge(apis)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求一个 span，带方法与路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
