//! Record shapes shared by every layer.
//!
//! - `api_record`: domain boundary, what business rules operate on
//! - `presentation`: wire shapes read from and written to requests
//! - `data`: storage shape written to the key-value table
//! - `shared`: nested value objects reused by all three boundaries

pub mod api_record;
pub mod data;
pub mod presentation;
pub mod shared;

pub use api_record::{ApiRecord, ApiRecordSummary};
pub use data::{ApiRecordItem, RecordKey};
pub use presentation::{ApiRecordInput, ApiRecordOutput, GetApiInput};
pub use shared::{
    ApiStatus, Dependencies, DependencyApi, DependencyDatabase, DependencyScript, Endpoint, Environments,
    OtherDocumentation,
};
