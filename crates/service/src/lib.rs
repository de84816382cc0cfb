//! Service layer for API records.
//! - `usecase` holds the business rules.
//! - `gateway` talks to the records table through a [`storage::KeyValueStore`].
//! - `mappers` translate between presentation, domain and data shapes.
//! - `errors` is the closed error taxonomy the request handler maps to HTTP.

pub mod errors;
pub mod gateway;
pub mod mappers;
pub mod runtime;
pub mod storage;
pub mod usecase;
