use thiserror::Error;

use crate::{
    catalog::domain::model::enums::catalog_domain_error::CatalogDomainError,
    credentials::domain::model::enums::credentials_domain_error::CredentialsDomainError,
    provisioning_api::domain::model::enums::provisioning_api_error::ProvisioningApiError,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BrokerDomainError {
    #[error("This service plan requires client support for asynchronous service operations.")]
    AsyncRequired,

    #[error("instance does not exist")]
    InstanceNotFound,

    #[error("changing plans is not currently supported")]
    PlanChangeNotSupported,

    #[error("failed to get connection string")]
    ConnectionStringMissing,

    #[error("DB Engine '{0}' not supported")]
    CredentialEngineUnsupported(String),

    #[error("malformed response from provisioning API: {0}")]
    MalformedProviderResponse(String),

    #[error("{0}")]
    ProviderError(String),

    #[error("{0}")]
    RestoreConstraintViolation(String),

    #[error("that instance has no restorable snapshots")]
    NoRestorableSnapshot,

    #[error("service '{0}' does not exist")]
    RestoreSourceNotFound(String),

    #[error("{0}")]
    InvalidInstanceName(String),

    #[error("invalid operation data: {0}")]
    InvalidOperationData(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("service '{0}' not found")]
    ServiceNotFound(String),

    #[error("plan '{0}' not found")]
    PlanNotFound(String),

    #[error("catalog error: {0}")]
    InvalidCatalog(String),

    #[error(transparent)]
    Credentials(CredentialsDomainError),
}

impl From<ProvisioningApiError> for BrokerDomainError {
    fn from(error: ProvisioningApiError) -> Self {
        Self::ProviderError(error.to_string())
    }
}

impl From<CatalogDomainError> for BrokerDomainError {
    fn from(error: CatalogDomainError) -> Self {
        match error {
            CatalogDomainError::ServiceNotFound(id) => Self::ServiceNotFound(id),
            CatalogDomainError::PlanNotFound(id) => Self::PlanNotFound(id),
            other => Self::InvalidCatalog(other.to_string()),
        }
    }
}

impl From<CredentialsDomainError> for BrokerDomainError {
    fn from(error: CredentialsDomainError) -> Self {
        match error {
            CredentialsDomainError::UnsupportedEngine(engine) => {
                Self::CredentialEngineUnsupported(engine)
            }
            CredentialsDomainError::ConnectionStringMissing => Self::ConnectionStringMissing,
            other => Self::Credentials(other),
        }
    }
}
