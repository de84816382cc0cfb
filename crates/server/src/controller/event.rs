use std::collections::HashMap;

use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service::errors::ServiceError;
use uuid::Uuid;

/// Trigger event handed to an endpoint.
///
/// `body` is either raw text (a JSON string value, parsed on demand) or an
/// already structured JSON value. Absent, null and blank bodies read as `{}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Raw wire text, as a hosted trigger delivers it.
    pub fn with_body_text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(Value::String(text.into()));
        self
    }

    /// Pre-parsed body.
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_parameters.as_ref()?.get(name).map(String::as_str)
    }

    /// Body fields as a JSON object. Errors carry a client-facing message.
    pub fn body_fields(&self) -> Result<Map<String, Value>, String> {
        let parsed = match &self.body {
            None | Some(Value::Null) => return Ok(Map::new()),
            Some(Value::String(text)) if text.trim().is_empty() => return Ok(Map::new()),
            Some(Value::String(text)) => serde_json::from_str::<Value>(text)
                .map_err(|e| format!("Request body is not valid JSON: {e}"))?,
            Some(structured) => structured.clone(),
        };
        match parsed {
            Value::Object(fields) => Ok(fields),
            Value::Null => Ok(Map::new()),
            _ => Err("Request body must be a JSON object.".to_string()),
        }
    }

    /// Path parameters overlaid with body fields; the body wins on collisions.
    pub fn merged_input(&self) -> Result<Map<String, Value>, String> {
        let mut merged: Map<String, Value> = self
            .path_parameters
            .iter()
            .flatten()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        merged.extend(self.body_fields()?);
        Ok(merged)
    }

    /// Deserialize the body into a presentation type.
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, ServiceError> {
        let fields = self.body_fields().map_err(ServiceError::MalformedPayload)?;
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| ServiceError::MalformedPayload(format!("Request body has an unexpected shape: {e}")))
    }
}

/// Invocation context, passed through to implementations untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    pub request_id: String,
    pub function_name: String,
}

impl Context {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self { request_id: Uuid::new_v4().to_string(), function_name: function_name.into() }
    }
}

/// What an implementation returns on success.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    pub fn status(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Self, ServiceError> {
        Ok(Self { status, body: Some(serde_json::to_value(body)?) })
    }
}

/// HTTP-shaped result of an endpoint: `{ statusCode, body? }` with the body
/// already serialized to wire text.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Response {
    pub fn new(status: StatusCode, body: Option<Value>) -> Self {
        Self { status_code: status.as_u16(), body: body.map(|b| b.to_string()) }
    }

    /// Body parsed back into JSON; `None` when there is no body or it is not JSON.
    pub fn json_body(&self) -> Option<Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

impl From<Reply> for Response {
    fn from(reply: Reply) -> Self {
        Response::new(reply.status, reply.body)
    }
}
