use std::io::Write;

use async_trait::async_trait;
use mongodb::{
    Client,
    bson::{Document, doc},
    error::{Error as MongoError, ErrorKind},
    options::{ClientOptions, Tls, TlsOptions},
};
use tempfile::NamedTempFile;

use crate::credentials::domain::{
    model::{
        entities::database_user::DatabaseUser,
        enums::credentials_domain_error::CredentialsDomainError,
    },
    services::document_store_driver::{
        AdminConnection, DocumentStoreConnector, DocumentStoreSession,
    },
};

const USER_NOT_FOUND_CODE: i32 = 11;

pub struct MongoDbDocumentStoreConnectorImpl;

impl MongoDbDocumentStoreConnectorImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MongoDbDocumentStoreConnectorImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStoreConnector for MongoDbDocumentStoreConnectorImpl {
    async fn connect(
        &self,
        connection: &AdminConnection,
    ) -> Result<Box<dyn DocumentStoreSession>, CredentialsDomainError> {
        // The driver only reads CAs from disk.
        let mut ca_file = NamedTempFile::new()
            .map_err(|e| CredentialsDomainError::InvalidCaCertificate(e.to_string()))?;
        ca_file
            .write_all(&connection.ca_certificate_pem)
            .and_then(|_| ca_file.flush())
            .map_err(|e| CredentialsDomainError::InvalidCaCertificate(e.to_string()))?;

        let mut options = ClientOptions::parse(connection.connection_string.to_uri())
            .await
            .map_err(|e| CredentialsDomainError::InvalidConnectionString(e.to_string()))?;
        options.connect_timeout = Some(connection.connect_timeout);
        options.server_selection_timeout = Some(connection.connect_timeout);

        let mut tls = TlsOptions::default();
        tls.ca_file_path = Some(ca_file.path().to_path_buf());
        options.tls = Some(Tls::Enabled(tls));

        let client = Client::with_options(options)
            .map_err(|e| CredentialsDomainError::Connection(e.to_string()))?;

        // The driver dials lazily; force the handshake so failures surface here.
        if let Err(error) = client.database("admin").run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(CredentialsDomainError::Connection(error.to_string()));
        }

        Ok(Box::new(MongoDbDocumentStoreSession {
            client,
            _ca_file: ca_file,
        }))
    }
}

struct MongoDbDocumentStoreSession {
    client: Client,
    _ca_file: NamedTempFile,
}

#[async_trait]
impl DocumentStoreSession for MongoDbDocumentStoreSession {
    async fn list_database_names(&self) -> Result<Vec<String>, CredentialsDomainError> {
        self.client
            .list_database_names()
            .await
            .map_err(|e| CredentialsDomainError::ListDatabases(e.to_string()))
    }

    async fn upsert_user(
        &self,
        database: &str,
        user: &DatabaseUser,
    ) -> Result<(), CredentialsDomainError> {
        let db = self.client.database(database);
        let roles = vec![doc! { "role": user.role.as_str(), "db": database }];

        let update = db
            .run_command(doc! {
                "updateUser": user.username.as_str(),
                "pwd": user.password.as_str(),
                "roles": roles.clone(),
            })
            .await;

        match update {
            Ok(_) => Ok(()),
            Err(error) if is_user_not_found(&error) => db
                .run_command(doc! {
                    "createUser": user.username.as_str(),
                    "pwd": user.password.as_str(),
                    "roles": roles,
                })
                .await
                .map(|_: Document| ())
                .map_err(|e| CredentialsDomainError::UserCreation(e.to_string())),
            Err(error) => Err(CredentialsDomainError::UserCreation(error.to_string())),
        }
    }

    async fn remove_user(
        &self,
        database: &str,
        username: &str,
    ) -> Result<(), CredentialsDomainError> {
        match self
            .client
            .database(database)
            .run_command(doc! { "dropUser": username })
            .await
        {
            Ok(_) => Ok(()),
            Err(error) if is_user_not_found(&error) => Ok(()),
            Err(error) => Err(CredentialsDomainError::UserRemoval(error.to_string())),
        }
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}

fn is_user_not_found(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Command(command) if command.code == USER_NOT_FOUND_CODE
    )
}
