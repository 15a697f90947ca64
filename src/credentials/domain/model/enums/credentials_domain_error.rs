use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CredentialsDomainError {
    #[error("failed to get connection string")]
    ConnectionStringMissing,

    #[error("connection string is empty")]
    ConnectionStringEmpty,

    #[error("invalid connection string: {0}")]
    InvalidConnectionString(String),

    #[error("connection string did not contain a user")]
    MissingUser,

    #[error("invalid CA certificate: {0}")]
    InvalidCaCertificate(String),

    #[error("failed to connect to the database: {0}")]
    Connection(String),

    #[error("failed to list the databases: {0}")]
    ListDatabases(String),

    #[error("failed to create user in the database: {0}")]
    UserCreation(String),

    #[error("failed to remove user from the database: {0}")]
    UserRemoval(String),

    #[error("failed to generate password: {0}")]
    PasswordGeneration(String),

    #[error("DB Engine '{0}' not supported")]
    UnsupportedEngine(String),
}
