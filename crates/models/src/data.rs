//! Storage shape of a record: one flat JSON object per key in the records
//! table, keyed by `id`, with `githubId` available to scan filters.

use serde::{Deserialize, Serialize};

use crate::shared::{ApiStatus, Dependencies, Environments, OtherDocumentation};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecordItem {
    pub id: String,
    pub github_id: u64,
    pub name: String,
    #[serde(default)]
    pub base_url: Environments,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub dependencies: Dependencies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiStatus>,
    #[serde(default)]
    pub other_documentation: OtherDocumentation,
}

impl ApiRecordItem {
    /// Attribute the table is keyed by.
    pub const KEY_ATTRIBUTE: &'static str = "id";
    /// Attribute holding the external (repository) id.
    pub const GITHUB_ID_ATTRIBUTE: &'static str = "githubId";
}

/// Lookup key of a single item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordKey {
    pub id: String,
}
