//! Wire shapes. Inputs are lenient: every field is optional and unknown
//! fields are ignored, validation happens before mapping.

use serde::{Deserialize, Serialize};

use crate::shared::{ApiStatus, Dependencies, Environments, OtherDocumentation};

/// Create payload as posted by clients.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecordInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub github_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_url: Option<Environments>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub dependencies: Option<Dependencies>,
    #[serde(default)]
    pub status: Option<ApiStatus>,
    #[serde(default)]
    pub other_documentation: Option<OtherDocumentation>,
}

/// Path parameters of a single-record read.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GetApiInput {
    pub id: String,
}

/// Record as returned to clients.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecordOutput {
    pub id: String,
    pub github_id: u64,
    pub name: String,
    pub base_url: Environments,
    pub github_url: String,
    pub dependencies: Dependencies,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiStatus>,
    pub other_documentation: OtherDocumentation,
}
