use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::{
    credentials::domain::{
        model::{
            entities::{
                binding_credentials::DocumentStoreCredentials, database_user::DatabaseUser,
            },
            enums::credentials_domain_error::CredentialsDomainError,
            value_objects::{
                binding_password::BindingPassword, binding_username::BindingUsername,
                connection_string::ConnectionString,
            },
        },
        services::document_store_driver::{
            AdminConnection, DocumentStoreConnector, DocumentStoreSession,
        },
    },
    provisioning_api::domain::model::entities::deployment::Deployment,
};

pub const DEFAULT_DATABASE_NAME: &str = "default";
pub const LEGACY_DATABASE_PREFIX: &str = "db_";
pub const ADMIN_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct DocumentStoreCredentialEngine {
    deployment: Deployment,
    connector: Arc<dyn DocumentStoreConnector>,
}

impl DocumentStoreCredentialEngine {
    pub fn new(deployment: Deployment, connector: Arc<dyn DocumentStoreConnector>) -> Self {
        Self {
            deployment,
            connector,
        }
    }

    pub fn admin_connection(&self) -> Result<AdminConnection, CredentialsDomainError> {
        let endpoint = self
            .deployment
            .primary_endpoint()
            .ok_or(CredentialsDomainError::ConnectionStringMissing)?;
        if endpoint.trim().is_empty() {
            return Err(CredentialsDomainError::ConnectionStringEmpty);
        }

        // TLS is configured explicitly on the session instead.
        let connection_string = ConnectionString::parse(endpoint)?.without_option("ssl");

        let ca_certificate_pem = STANDARD
            .decode(self.deployment.ca_certificate_base64.trim())
            .map_err(|e| CredentialsDomainError::InvalidCaCertificate(e.to_string()))?;
        if ca_certificate_pem.is_empty() {
            return Err(CredentialsDomainError::InvalidCaCertificate(
                "certificate is empty".to_string(),
            ));
        }

        Ok(AdminConnection {
            connection_string,
            ca_certificate_pem,
            connect_timeout: ADMIN_CONNECT_TIMEOUT,
        })
    }

    pub async fn generate_credentials(
        &self,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<DocumentStoreCredentials, CredentialsDomainError> {
        let connection = self.admin_connection()?;
        let session = self.connector.connect(&connection).await?;

        let result = self
            .issue_user(session.as_ref(), &connection, instance_id, binding_id)
            .await;
        session.close().await;

        result
    }

    pub async fn revoke_credentials(
        &self,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<(), CredentialsDomainError> {
        let connection = self.admin_connection()?;
        let session = self.connector.connect(&connection).await?;

        let result = self
            .remove_user(session.as_ref(), instance_id, binding_id)
            .await;
        session.close().await;

        result
    }

    async fn issue_user(
        &self,
        session: &dyn DocumentStoreSession,
        connection: &AdminConnection,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<DocumentStoreCredentials, CredentialsDomainError> {
        let database = resolve_database_name(session).await?;
        let username = BindingUsername::for_binding(binding_id);
        let password = BindingPassword::generate()?;

        session
            .upsert_user(
                &database,
                &DatabaseUser::read_write(username.value(), password.value()),
            )
            .await?;

        debug!(
            instance_id,
            binding_id,
            database = %database,
            username = username.value(),
            "database user issued"
        );

        let bound = connection
            .connection_string
            .clone()
            .without_options()
            .with_credentials(username.value(), password.value())
            .with_database(&database);

        Ok(DocumentStoreCredentials {
            hosts: bound.hosts().to_vec(),
            name: database,
            username: username.value().to_string(),
            password: password.value().to_string(),
            uri: bound.to_uri(),
            ca_certificate_base64: self.deployment.ca_certificate_base64.clone(),
        })
    }

    async fn remove_user(
        &self,
        session: &dyn DocumentStoreSession,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<(), CredentialsDomainError> {
        let database = resolve_database_name(session).await?;
        let username = BindingUsername::for_binding(binding_id);

        session.remove_user(&database, username.value()).await?;

        debug!(
            instance_id,
            binding_id,
            database = %database,
            username = username.value(),
            "database user removed"
        );
        Ok(())
    }
}

async fn resolve_database_name(
    session: &dyn DocumentStoreSession,
) -> Result<String, CredentialsDomainError> {
    let names = session.list_database_names().await?;
    Ok(select_database_name(&names))
}

// Any `db_` legacy database first, then `default`; `default` when neither exists.
pub fn select_database_name(names: &[String]) -> String {
    names
        .iter()
        .find(|name| name.starts_with(LEGACY_DATABASE_PREFIX))
        .or_else(|| names.iter().find(|name| name.as_str() == DEFAULT_DATABASE_NAME))
        .cloned()
        .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string())
}
