use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    credentials::domain::model::{
        entities::binding_credentials::SearchCredentials,
        enums::credentials_domain_error::CredentialsDomainError,
        value_objects::connection_string::ConnectionString,
    },
    provisioning_api::domain::model::entities::deployment::Deployment,
};

lazy_static! {
    // The provisioning API sometimes drops the dot in `<cluster>-c00.2.compose.direct`.
    static ref MALFORMED_DIRECT_HOST_REGEX: Regex =
        Regex::new(r"(.+-[a-z]{1}[0-9]{2})\.?(\d+)([^:]+):(\d+)").expect("valid regex");
}

pub struct SearchCredentialEngine {
    deployment: Deployment,
}

impl SearchCredentialEngine {
    pub fn new(deployment: Deployment) -> Self {
        Self { deployment }
    }

    pub fn generate_credentials(&self) -> Result<SearchCredentials, CredentialsDomainError> {
        if !self.deployment.has_endpoint() {
            return Err(CredentialsDomainError::ConnectionStringMissing);
        }

        let endpoints = self
            .deployment
            .connection
            .direct
            .iter()
            .map(|endpoint| parse_endpoint(endpoint))
            .collect::<Result<Vec<_>, _>>()?;

        let primary = &endpoints[0];
        let username = primary
            .username()
            .filter(|user| !user.is_empty())
            .ok_or(CredentialsDomainError::MissingUser)?;
        let (host, port) = split_host_port(&primary.hosts()[0]);

        Ok(SearchCredentials {
            host,
            hosts: primary.hosts().to_vec(),
            port,
            name: primary.database().to_string(),
            username: username.to_string(),
            password: primary.password().unwrap_or_default().to_string(),
            uri: primary.to_uri(),
            uris: endpoints.iter().map(ConnectionString::to_uri).collect(),
            ca_certificate_base64: self.deployment.ca_certificate_base64.clone(),
        })
    }

    pub fn revoke_credentials(&self) -> Result<(), CredentialsDomainError> {
        Ok(())
    }
}

fn parse_endpoint(endpoint: &str) -> Result<ConnectionString, CredentialsDomainError> {
    let parsed = ConnectionString::parse(endpoint)?;
    let hosts = parsed.hosts().iter().map(|host| mend_hostname(host)).collect();
    Ok(parsed.with_hosts(hosts))
}

pub fn mend_hostname(host: &str) -> String {
    if !host.contains("compose.direct") {
        return host.to_string();
    }

    match MALFORMED_DIRECT_HOST_REGEX.captures(host) {
        Some(parts) => format!("{}.{}{}:{}", &parts[1], &parts[2], &parts[3], &parts[4]),
        None => host.to_string(),
    }
}

fn split_host_port(address: &str) -> (String, String) {
    match address.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => {
            (host.to_string(), port.to_string())
        }
        _ => (address.to_string(), String::new()),
    }
}
