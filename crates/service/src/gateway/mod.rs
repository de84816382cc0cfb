//! Persistence gateway for API records.

pub mod api_records;
pub mod mock;

pub use api_records::{ApiRecordsGateway, KvApiRecordsGateway};
