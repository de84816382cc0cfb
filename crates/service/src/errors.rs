use thiserror::Error;

use crate::storage::StoreError;

/// Failures raised below the request handler.
///
/// The set is closed: the handler translates each variant to exactly one
/// status/body pair and never inspects anything but [`ServiceError::kind`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("duplicate record: {0}")]
    Duplicate(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

/// Kind tag of a [`ServiceError`], in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RecordNotFound,
    DuplicateRecord,
    StoreUnavailable,
    MalformedPayload,
    Unclassified,
}

impl ServiceError {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound(format!("Record with id: {id} was not found."))
    }

    pub fn duplicate(github_id: u64) -> Self {
        Self::Duplicate(format!("The project from this repository (githubId: {github_id}) already exists!"))
    }

    /// A create that names an id some other record already holds.
    pub fn duplicate_id(id: &str) -> Self {
        Self::Duplicate(format!("A record with id: {id} already exists!"))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::NotFound(_) => ErrorKind::RecordNotFound,
            ServiceError::Duplicate(_) => ErrorKind::DuplicateRecord,
            ServiceError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            ServiceError::MalformedPayload(_) => ErrorKind::MalformedPayload,
            ServiceError::Other(_) => ErrorKind::Unclassified,
        }
    }

    /// The message without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            ServiceError::NotFound(m)
            | ServiceError::Duplicate(m)
            | ServiceError::StoreUnavailable(m)
            | ServiceError::MalformedPayload(m)
            | ServiceError::Other(m) => m,
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self.kind() {
            ErrorKind::RecordNotFound => 2001,
            ErrorKind::DuplicateRecord => 2002,
            ErrorKind::MalformedPayload => 2003,
            ErrorKind::StoreUnavailable => 2101,
            ErrorKind::Unclassified => 2200,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        ServiceError::StoreUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Other(e.to_string())
    }
}
