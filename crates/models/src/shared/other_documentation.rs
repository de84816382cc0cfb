use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtherDocumentation {
    /// Free text describing what the API is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_context: Option<String>,
    /// Link to the data model documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_model: Option<String>,
}
