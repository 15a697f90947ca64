use crate::credentials::domain::model::enums::credentials_domain_error::CredentialsDomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    DocumentStore,
    Search,
    KeyValue,
}

impl EngineKind {
    pub fn from_deployment_type(deployment_type: &str) -> Result<Self, CredentialsDomainError> {
        match deployment_type.trim().to_lowercase().as_str() {
            "mongodb" => Ok(Self::DocumentStore),
            "elastic_search" => Ok(Self::Search),
            "redis" => Ok(Self::KeyValue),
            _ => Err(CredentialsDomainError::UnsupportedEngine(
                deployment_type.to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentStore => "mongodb",
            Self::Search => "elastic_search",
            Self::KeyValue => "redis",
        }
    }
}
