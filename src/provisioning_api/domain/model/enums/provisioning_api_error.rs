use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProvisioningApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{}", squash_errors(.0))]
    Remote(Vec<String>),

    #[error("provisioning API unreachable: {0}")]
    Transport(String),

    #[error("malformed response from provisioning API: {0}")]
    MalformedResponse(String),
}

pub fn squash_errors(errors: &[String]) -> String {
    errors.join("; ")
}
