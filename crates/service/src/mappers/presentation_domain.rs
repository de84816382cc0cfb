use models::{ApiRecord, ApiRecordInput, ApiRecordOutput, GetApiInput};

use crate::errors::ServiceError;

#[derive(Clone, Copy, Debug, Default)]
pub struct PresentationDomainMapper;

impl PresentationDomainMapper {
    pub fn new() -> Self {
        Self
    }

    /// Create payload to domain record. Optional parts default to empty;
    /// `githubId` is the only field without a sensible default.
    pub fn to_domain(&self, input: ApiRecordInput) -> Result<ApiRecord, ServiceError> {
        let github_id = input
            .github_id
            .ok_or_else(|| ServiceError::MalformedPayload("githubId must be a non-negative integer".into()))?;
        Ok(ApiRecord {
            id: input.id.filter(|id| !id.trim().is_empty()),
            github_id,
            name: input.name.unwrap_or_default(),
            base_url: input.base_url.unwrap_or_default(),
            github_url: input.github_url.unwrap_or_default(),
            dependencies: input.dependencies.unwrap_or_default(),
            status: input.status,
            other_documentation: input.other_documentation.unwrap_or_default(),
        })
    }

    pub fn to_domain_get(&self, input: GetApiInput) -> String {
        input.id
    }

    pub fn to_presentation(&self, record: ApiRecord) -> ApiRecordOutput {
        ApiRecordOutput {
            id: record.id.unwrap_or_default(),
            github_id: record.github_id,
            name: record.name,
            base_url: record.base_url,
            github_url: record.github_url,
            dependencies: record.dependencies,
            status: record.status,
            other_documentation: record.other_documentation,
        }
    }
}
