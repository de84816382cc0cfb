use serde::{Deserialize, Serialize};

/// Lifecycle status of a registered API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Active,
    DeprecationWarning,
    Deprecated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_value(ApiStatus::Active).unwrap(), "ACTIVE");
        assert_eq!(serde_json::to_value(ApiStatus::DeprecationWarning).unwrap(), "DEPRECATION_WARNING");
        let parsed: ApiStatus = serde_json::from_value(serde_json::json!("DEPRECATED")).unwrap();
        assert_eq!(parsed, ApiStatus::Deprecated);
        assert!(serde_json::from_value::<ApiStatus>(serde_json::json!("RETIRED")).is_err());
    }
}
