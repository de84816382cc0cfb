//! Request handling: trigger event in, HTTP-shaped response out.
//!
//! [`base_endpoint`] is the reusable part. It parses and validates the input,
//! runs an implementation and turns whatever [`service::errors::ServiceError`]
//! comes back into a fixed status/body pair. [`api_records`] builds the four
//! record endpoints on top of it.

pub mod api_records;
pub mod endpoint;
pub mod event;
pub mod validation;

pub use api_records::ApiRecordsController;
pub use endpoint::{base_endpoint, Endpoint, Implementation};
pub use event::{Context, Event, Reply, Response};
pub use validation::ValidationRule;
