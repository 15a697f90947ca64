use std::time::Duration;

use async_trait::async_trait;

use crate::credentials::domain::model::{
    entities::database_user::DatabaseUser,
    enums::credentials_domain_error::CredentialsDomainError,
    value_objects::connection_string::ConnectionString,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminConnection {
    pub connection_string: ConnectionString,
    pub ca_certificate_pem: Vec<u8>,
    pub connect_timeout: Duration,
}

#[async_trait]
pub trait DocumentStoreConnector: Send + Sync {
    async fn connect(
        &self,
        connection: &AdminConnection,
    ) -> Result<Box<dyn DocumentStoreSession>, CredentialsDomainError>;
}

/// An open administrative session. Callers must `close` it on every path.
#[async_trait]
pub trait DocumentStoreSession: Send + Sync {
    async fn list_database_names(&self) -> Result<Vec<String>, CredentialsDomainError>;

    async fn upsert_user(
        &self,
        database: &str,
        user: &DatabaseUser,
    ) -> Result<(), CredentialsDomainError>;

    /// Removing a user that does not exist succeeds.
    async fn remove_user(&self, database: &str, username: &str)
    -> Result<(), CredentialsDomainError>;

    async fn close(&self);
}
