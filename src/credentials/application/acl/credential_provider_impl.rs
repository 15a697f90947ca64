use std::sync::Arc;

use crate::{
    credentials::{
        application::engines::{
            credential_engine::CredentialEngine,
            document_store_credential_engine::DocumentStoreCredentialEngine,
            key_value_credential_engine::KeyValueCredentialEngine,
            search_credential_engine::SearchCredentialEngine,
        },
        domain::{
            model::enums::{
                credentials_domain_error::CredentialsDomainError, engine_kind::EngineKind,
            },
            services::document_store_driver::DocumentStoreConnector,
        },
        interfaces::acl::credential_provider::CredentialProvider,
    },
    provisioning_api::domain::model::entities::deployment::Deployment,
};

pub struct CredentialProviderImpl {
    document_store_connector: Arc<dyn DocumentStoreConnector>,
}

impl CredentialProviderImpl {
    pub fn new(document_store_connector: Arc<dyn DocumentStoreConnector>) -> Self {
        Self {
            document_store_connector,
        }
    }
}

impl CredentialProvider for CredentialProviderImpl {
    fn engine_for(&self, deployment: &Deployment) -> Result<CredentialEngine, CredentialsDomainError> {
        let engine = match EngineKind::from_deployment_type(&deployment.deployment_type)? {
            EngineKind::DocumentStore => CredentialEngine::DocumentStore(
                DocumentStoreCredentialEngine::new(
                    deployment.clone(),
                    self.document_store_connector.clone(),
                ),
            ),
            EngineKind::Search => {
                CredentialEngine::Search(SearchCredentialEngine::new(deployment.clone()))
            }
            EngineKind::KeyValue => {
                CredentialEngine::KeyValue(KeyValueCredentialEngine::new(deployment.clone()))
            }
        };

        Ok(engine)
    }
}
