use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use service::errors::{ErrorKind, ServiceError};
use tracing::{debug, error, warn};

use super::event::{Context, Event, Reply, Response};
use super::validation::ValidationRule;

pub const STORE_UNAVAILABLE_MESSAGE: &str = "Store client error. Please try again later.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected server error.";

/// The part of an endpoint that does the actual work once input is valid.
#[async_trait]
pub trait Implementation: Send + Sync {
    async fn handle(&self, event: Event, context: Context) -> Result<Reply, ServiceError>;
}

#[async_trait]
impl<F, Fut> Implementation for F
where
    F: Fn(Event, Context) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Reply, ServiceError>> + Send,
{
    async fn handle(&self, event: Event, context: Context) -> Result<Reply, ServiceError> {
        (self)(event, context).await
    }
}

/// Validators plus an implementation, callable as `(event, context) -> response`.
/// Cheap to clone; built once and shared.
#[derive(Clone)]
pub struct Endpoint {
    validators: Arc<[ValidationRule]>,
    implementation: Arc<dyn Implementation>,
}

/// Wrap `implementation` with input validation and error translation.
///
/// 1. The body is parsed; unparseable or non-object bodies answer 400.
/// 2. Path parameters and body fields are merged, body fields winning.
/// 3. Every rule runs; any failures answer 400 with all messages, in order,
///    and the implementation is not called.
/// 4. Otherwise the implementation runs with the original event and context.
///    Its reply is forwarded as is; its error is mapped by kind.
pub fn base_endpoint<I>(validators: Vec<ValidationRule>, implementation: I) -> Endpoint
where
    I: Implementation + 'static,
{
    Endpoint { validators: validators.into(), implementation: Arc::new(implementation) }
}

impl Endpoint {
    pub async fn call(&self, event: Event, context: Context) -> Response {
        let input = match event.merged_input() {
            Ok(input) => input,
            Err(message) => {
                debug!(request_id = %context.request_id, function = %context.function_name, %message, "malformed request body");
                return validation_failure(vec![message]);
            }
        };

        let failures: Vec<String> = self
            .validators
            .iter()
            .filter(|rule| !rule.validate(&input))
            .map(|rule| rule.failure_message().to_string())
            .collect();
        if !failures.is_empty() {
            debug!(request_id = %context.request_id, function = %context.function_name, failures = failures.len(), "request rejected by validation");
            return validation_failure(failures);
        }

        let request_id = context.request_id.clone();
        let function = context.function_name.clone();
        match self.implementation.handle(event, context).await {
            Ok(reply) => reply.into(),
            Err(err) => {
                match err.kind() {
                    ErrorKind::RecordNotFound | ErrorKind::DuplicateRecord | ErrorKind::MalformedPayload => {
                        warn!(%request_id, %function, code = err.code(), error = %err, "request failed")
                    }
                    ErrorKind::StoreUnavailable | ErrorKind::Unclassified => {
                        error!(%request_id, %function, code = err.code(), error = %err, "request failed")
                    }
                }
                error_response(&err)
            }
        }
    }
}

/// Fixed status/body pair for every error kind.
pub fn error_response(err: &ServiceError) -> Response {
    match err.kind() {
        ErrorKind::RecordNotFound => echo(StatusCode::NOT_FOUND, err.message()),
        ErrorKind::DuplicateRecord => echo(StatusCode::CONFLICT, err.message()),
        ErrorKind::StoreUnavailable => {
            messages(StatusCode::SERVICE_UNAVAILABLE, STORE_UNAVAILABLE_MESSAGE, err.message())
        }
        ErrorKind::MalformedPayload => validation_failure(vec![err.message().to_string()]),
        ErrorKind::Unclassified => {
            messages(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE, err.message())
        }
    }
}

fn validation_failure(messages: Vec<String>) -> Response {
    Response::new(StatusCode::BAD_REQUEST, Some(json!({ "validationErrors": messages })))
}

fn echo(status: StatusCode, message: &str) -> Response {
    messages(status, message, message)
}

fn messages(status: StatusCode, user_message: &str, error_message: &str) -> Response {
    Response::new(status, Some(json!({ "userMessage": user_message, "errorMessage": error_message })))
}
