use serde::{Deserialize, Serialize};

/// Base URL of the API per deployment environment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Environments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<String>,
}

impl Environments {
    /// Names accepted as environment keys, in display order.
    pub const NAMES: [&'static str; 3] = ["development", "staging", "production"];

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("development", self.development.as_deref()),
            ("staging", self.staging.as_deref()),
            ("production", self.production.as_deref()),
        ]
        .into_iter()
    }

    /// True when at least one environment carries a URL with visible characters.
    pub fn has_any_url(&self) -> bool {
        self.iter().any(|(_, url)| url.is_some_and(|u| !u.trim().is_empty()))
    }
}
