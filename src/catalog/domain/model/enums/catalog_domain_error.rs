use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    #[error("service '{0}' not found")]
    ServiceNotFound(String),

    #[error("plan '{0}' not found")]
    PlanNotFound(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("could not read catalog file: {0}")]
    Unreadable(String),
}
