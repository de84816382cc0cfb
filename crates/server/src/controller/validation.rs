use std::borrow::Cow;
use std::fmt;

use models::Environments;
use serde_json::{Map, Value};

type Predicate = dyn Fn(&Map<String, Value>) -> bool + Send + Sync;

/// A named check over the merged request input.
pub struct ValidationRule {
    failure_message: Cow<'static, str>,
    predicate: Box<Predicate>,
}

impl ValidationRule {
    pub fn new<F>(failure_message: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> bool + Send + Sync + 'static,
    {
        Self { failure_message: failure_message.into(), predicate: Box::new(predicate) }
    }

    pub fn validate(&self, input: &Map<String, Value>) -> bool {
        (self.predicate)(input)
    }

    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule").field("failure_message", &self.failure_message).finish()
    }
}

/// A string with at least one non-whitespace character.
pub fn non_empty(value: Option<&Value>) -> bool {
    value.and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty())
}

pub const NAME_REQUIRED: &str = "Please provide a non-empty API name.";
pub const GITHUB_ID_REQUIRED: &str = "Please provide a non-empty GithubId number.";
pub const BASE_URL_REQUIRED: &str = "Please provide a valid and non-empty API's url base.";
pub const GITHUB_URL_REQUIRED: &str = "Please provide a valid and non-empty Github url.";
pub const ID_REQUIRED: &str = "Please provide a non-empty API id.";

/// Rules for registering a record, in reporting order.
pub fn create_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::new(NAME_REQUIRED, |input| non_empty(input.get("name"))),
        ValidationRule::new(GITHUB_ID_REQUIRED, |input| {
            input.get("githubId").and_then(Value::as_u64).is_some()
        }),
        ValidationRule::new(BASE_URL_REQUIRED, |input| {
            input
                .get("baseUrl")
                .and_then(Value::as_object)
                .is_some_and(|envs| Environments::NAMES.iter().any(|name| non_empty(envs.get(*name))))
        }),
        ValidationRule::new(GITHUB_URL_REQUIRED, |input| non_empty(input.get("githubUrl"))),
    ]
}

/// Rules for reading a single record.
pub fn get_rules() -> Vec<ValidationRule> {
    vec![ValidationRule::new(ID_REQUIRED, |input| non_empty(input.get("id")))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failures(rules: &[ValidationRule], input: Value) -> Vec<String> {
        let input = input.as_object().cloned().unwrap_or_default();
        rules
            .iter()
            .filter(|r| !r.validate(&input))
            .map(|r| r.failure_message().to_string())
            .collect()
    }

    #[test]
    fn non_empty_requires_visible_text() {
        assert!(non_empty(Some(&json!("x"))));
        assert!(!non_empty(Some(&json!(" \t\n"))));
        assert!(!non_empty(Some(&json!(5))));
        assert!(!non_empty(None));
    }

    #[test]
    fn empty_input_fails_every_create_rule_in_order() {
        assert_eq!(
            failures(&create_rules(), json!({})),
            vec![NAME_REQUIRED, GITHUB_ID_REQUIRED, BASE_URL_REQUIRED, GITHUB_URL_REQUIRED]
        );
    }

    #[test]
    fn valid_create_input_passes() {
        let input = json!({
            "name": "Foo",
            "githubId": 12345,
            "baseUrl": {"staging": "http://x"},
            "githubUrl": "http://gh/x"
        });
        assert!(failures(&create_rules(), input).is_empty());
    }

    #[test]
    fn github_id_must_be_a_whole_number() {
        for bad in [json!("1234567890"), json!(-3), json!(1.5), json!(null)] {
            let input = json!({
                "name": "Foo",
                "githubId": bad,
                "baseUrl": {"production": "https://p"},
                "githubUrl": "http://gh/x"
            });
            assert_eq!(failures(&create_rules(), input), vec![GITHUB_ID_REQUIRED]);
        }
    }

    #[test]
    fn base_url_needs_one_known_non_empty_environment() {
        let base = |urls: Value| {
            json!({"name": "Foo", "githubId": 1, "githubUrl": "http://gh/x", "baseUrl": urls})
        };
        assert_eq!(failures(&create_rules(), base(json!({}))), vec![BASE_URL_REQUIRED]);
        assert_eq!(failures(&create_rules(), base(json!({"staging": "  "}))), vec![BASE_URL_REQUIRED]);
        assert_eq!(failures(&create_rules(), base(json!({"qa": "http://qa"}))), vec![BASE_URL_REQUIRED]);
        assert_eq!(failures(&create_rules(), base(json!("http://x"))), vec![BASE_URL_REQUIRED]);
        assert!(failures(&create_rules(), base(json!({"staging": "", "development": "http://d"}))).is_empty());
    }

    #[test]
    fn get_requires_id() {
        assert_eq!(failures(&get_rules(), json!({})), vec![ID_REQUIRED]);
        assert_eq!(failures(&get_rules(), json!({"id": ""})), vec![ID_REQUIRED]);
        assert!(failures(&get_rules(), json!({"id": "abc"})).is_empty());
    }
}
