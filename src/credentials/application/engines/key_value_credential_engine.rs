use percent_encoding::percent_decode_str;
use url::Url;

use crate::{
    credentials::domain::model::{
        entities::binding_credentials::KeyValueCredentials,
        enums::credentials_domain_error::CredentialsDomainError,
    },
    provisioning_api::domain::model::entities::deployment::Deployment,
};

pub struct KeyValueCredentialEngine {
    deployment: Deployment,
}

impl KeyValueCredentialEngine {
    pub fn new(deployment: Deployment) -> Self {
        Self { deployment }
    }

    pub fn generate_credentials(&self) -> Result<KeyValueCredentials, CredentialsDomainError> {
        let endpoint = self
            .deployment
            .primary_endpoint()
            .ok_or(CredentialsDomainError::ConnectionStringMissing)?;
        if endpoint.trim().is_empty() {
            return Err(CredentialsDomainError::ConnectionStringEmpty);
        }

        let url = Url::parse(endpoint.trim())
            .map_err(|e| CredentialsDomainError::InvalidConnectionString(e.to_string()))?;

        Ok(KeyValueCredentials {
            host: url.host_str().unwrap_or_default().to_string(),
            port: url.port().map(|port| port.to_string()).unwrap_or_default(),
            username: decode_component(url.username())?,
            password: decode_component(url.password().unwrap_or_default())?,
            uri: url.to_string(),
        })
    }

    pub fn revoke_credentials(&self) -> Result<(), CredentialsDomainError> {
        Ok(())
    }
}

fn decode_component(value: &str) -> Result<String, CredentialsDomainError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| CredentialsDomainError::InvalidConnectionString(e.to_string()))
}
