use serde::Serialize;

use crate::shared::{ApiStatus, Dependencies, Environments, OtherDocumentation};

/// API record as seen by business rules.
///
/// `id` is `None` until the record is created; creation assigns one when the
/// caller did not supply it. `github_id` is the source repository id and is
/// unique across all records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiRecord {
    pub id: Option<String>,
    pub github_id: u64,
    pub name: String,
    pub base_url: Environments,
    pub github_url: String,
    pub dependencies: Dependencies,
    pub status: Option<ApiStatus>,
    pub other_documentation: OtherDocumentation,
}

/// Projection used when listing records.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecordSummary {
    pub id: String,
    pub github_id: u64,
    pub name: String,
}
