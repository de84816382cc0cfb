use models::{ApiRecord, ApiRecordItem, ApiRecordSummary, RecordKey};

use crate::errors::ServiceError;

#[derive(Clone, Copy, Debug, Default)]
pub struct DomainDataMapper;

impl DomainDataMapper {
    pub fn new() -> Self {
        Self
    }

    /// Domain record to storage item. The record must already carry an id.
    pub fn to_data(&self, record: ApiRecord) -> Result<ApiRecordItem, ServiceError> {
        let id = record
            .id
            .ok_or_else(|| ServiceError::Other("cannot store an API record without an id".into()))?;
        Ok(ApiRecordItem {
            id,
            github_id: record.github_id,
            name: record.name,
            base_url: record.base_url,
            github_url: record.github_url,
            dependencies: record.dependencies,
            status: record.status,
            other_documentation: record.other_documentation,
        })
    }

    pub fn to_data_get(&self, id: &str) -> RecordKey {
        RecordKey { id: id.to_string() }
    }

    pub fn to_domain(&self, item: ApiRecordItem) -> ApiRecord {
        ApiRecord {
            id: Some(item.id),
            github_id: item.github_id,
            name: item.name,
            base_url: item.base_url,
            github_url: item.github_url,
            dependencies: item.dependencies,
            status: item.status,
            other_documentation: item.other_documentation,
        }
    }

    pub fn to_summary(&self, item: ApiRecordItem) -> ApiRecordSummary {
        ApiRecordSummary { id: item.id, github_id: item.github_id, name: item.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::PresentationDomainMapper;
    use models::ApiRecordInput;
    use serde_json::json;

    #[test]
    fn wire_to_storage_keeps_known_fields_and_drops_unknown() {
        let wire = json!({
            "id": "rec-1",
            "githubId": 4242,
            "name": "Orders",
            "baseUrl": {"development": "http://dev", "production": "https://prod", "qa": "http://qa"},
            "githubUrl": "https://github.com/acme/orders",
            "status": "DEPRECATION_WARNING",
            "dependencies": {
                "apis": [{"apiId": "pay", "apiName": "Payments API", "endpointsUsingIt": [{"httpMethod": "POST", "name": "/charge"}], "owner": "x"}],
                "scripts": [{"name": "nightly export", "description": "dumps orders"}],
                "databases": [{"name": "orders", "technicalName": "orders_DB", "type": "PostgreSQL", "hostedAt": "AWS"}],
                "packages": ["left-pad"]
            },
            "otherDocumentation": {"businessContext": "checkout", "dataModel": "https://docs/model"},
            "secret": "should not be stored"
        });
        let input: ApiRecordInput = serde_json::from_value(wire.clone()).unwrap();
        let record = PresentationDomainMapper::new().to_domain(input).unwrap();
        let item = DomainDataMapper::new().to_data(record.clone()).unwrap();
        let stored = serde_json::to_value(&item).unwrap();

        let mut expected = wire;
        let obj = expected.as_object_mut().unwrap();
        obj.remove("secret");
        obj["baseUrl"].as_object_mut().unwrap().remove("qa");
        obj["dependencies"].as_object_mut().unwrap().remove("packages");
        obj["dependencies"]["apis"][0].as_object_mut().unwrap().remove("owner");
        assert_eq!(stored, expected);

        // and back again
        assert_eq!(DomainDataMapper::new().to_domain(item), record);
    }

    #[test]
    fn record_without_id_cannot_be_stored() {
        let err = DomainDataMapper::new().to_data(ApiRecord::default()).unwrap_err();
        assert!(matches!(err, ServiceError::Other(_)));
    }

    #[test]
    fn summary_projection() {
        let item = DomainDataMapper::new()
            .to_data(ApiRecord { id: Some("a".into()), github_id: 3, name: "A".into(), ..Default::default() })
            .unwrap();
        let s = DomainDataMapper::new().to_summary(item);
        assert_eq!(serde_json::to_value(s).unwrap(), json!({"id": "a", "githubId": 3, "name": "A"}));
    }
}
