use crate::credentials::{
    application::engines::{
        document_store_credential_engine::DocumentStoreCredentialEngine,
        key_value_credential_engine::KeyValueCredentialEngine,
        search_credential_engine::SearchCredentialEngine,
    },
    domain::model::{
        entities::binding_credentials::BindingCredentials,
        enums::{credentials_domain_error::CredentialsDomainError, engine_kind::EngineKind},
    },
};

pub enum CredentialEngine {
    DocumentStore(DocumentStoreCredentialEngine),
    Search(SearchCredentialEngine),
    KeyValue(KeyValueCredentialEngine),
}

impl CredentialEngine {
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::DocumentStore(_) => EngineKind::DocumentStore,
            Self::Search(_) => EngineKind::Search,
            Self::KeyValue(_) => EngineKind::KeyValue,
        }
    }

    pub async fn generate_credentials(
        &self,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<BindingCredentials, CredentialsDomainError> {
        match self {
            Self::DocumentStore(engine) => engine
                .generate_credentials(instance_id, binding_id)
                .await
                .map(BindingCredentials::DocumentStore),
            Self::Search(engine) => engine
                .generate_credentials()
                .map(BindingCredentials::Search),
            Self::KeyValue(engine) => engine
                .generate_credentials()
                .map(BindingCredentials::KeyValue),
        }
    }

    pub async fn revoke_credentials(
        &self,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<(), CredentialsDomainError> {
        match self {
            Self::DocumentStore(engine) => {
                engine.revoke_credentials(instance_id, binding_id).await
            }
            Self::Search(engine) => engine.revoke_credentials(),
            Self::KeyValue(engine) => engine.revoke_credentials(),
        }
    }
}
