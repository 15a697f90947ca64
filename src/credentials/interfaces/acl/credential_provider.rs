use crate::{
    credentials::{
        application::engines::credential_engine::CredentialEngine,
        domain::model::enums::credentials_domain_error::CredentialsDomainError,
    },
    provisioning_api::domain::model::entities::deployment::Deployment,
};

pub trait CredentialProvider: Send + Sync {
    fn engine_for(&self, deployment: &Deployment) -> Result<CredentialEngine, CredentialsDomainError>;
}
