use service::storage::StoreError;
use thiserror::Error;

/// Failures before the first request is served. Request-time failures are
/// [`service::errors::ServiceError`] and never surface here.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store could not be opened: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
