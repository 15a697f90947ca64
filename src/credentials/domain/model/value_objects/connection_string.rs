use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::form_urlencoded;

use crate::credentials::domain::model::enums::credentials_domain_error::CredentialsDomainError;

const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Multi-host lists are not valid URLs, so the parsing is done by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionString {
    scheme: String,
    username: Option<String>,
    password: Option<String>,
    hosts: Vec<String>,
    database: String,
    options: Vec<(String, String)>,
}

impl ConnectionString {
    pub fn parse(raw: &str) -> Result<Self, CredentialsDomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CredentialsDomainError::ConnectionStringEmpty);
        }

        let (scheme, remainder) = raw.split_once("://").ok_or_else(|| {
            CredentialsDomainError::InvalidConnectionString("missing scheme".to_string())
        })?;
        if scheme.is_empty() {
            return Err(CredentialsDomainError::InvalidConnectionString(
                "missing scheme".to_string(),
            ));
        }

        let (remainder, query) = remainder.split_once('?').unwrap_or((remainder, ""));
        let (authority, database) = remainder.split_once('/').unwrap_or((remainder, ""));
        let (userinfo, host_list) = match authority.rsplit_once('@') {
            Some((userinfo, hosts)) => (Some(userinfo), hosts),
            None => (None, authority),
        };

        let (username, password) = match userinfo {
            Some(userinfo) => {
                let (user, password) = match userinfo.split_once(':') {
                    Some((user, password)) => (user, Some(password)),
                    None => (userinfo, None),
                };
                if user.is_empty() {
                    return Err(CredentialsDomainError::InvalidConnectionString(
                        "credentials must be provided as user:pass@host".to_string(),
                    ));
                }
                (Some(decode(user)?), password.map(decode).transpose()?)
            }
            None => (None, None),
        };

        let hosts: Vec<String> = host_list
            .split(',')
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(str::to_string)
            .collect();
        if hosts.is_empty() {
            return Err(CredentialsDomainError::InvalidConnectionString(
                "no host given".to_string(),
            ));
        }

        Ok(Self {
            scheme: scheme.to_lowercase(),
            username,
            password,
            hosts,
            database: decode(database)?,
            options: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn without_option(mut self, name: &str) -> Self {
        self.options.retain(|(key, _)| key != name);
        self
    }

    pub fn without_options(mut self) -> Self {
        self.options.clear();
        self
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    pub fn with_hosts(mut self, hosts: Vec<String>) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn to_uri(&self) -> String {
        let mut uri = format!("{}://", self.scheme);

        if let Some(username) = &self.username {
            uri.push_str(&utf8_percent_encode(username, USERINFO).to_string());
            if let Some(password) = &self.password {
                uri.push(':');
                uri.push_str(&utf8_percent_encode(password, USERINFO).to_string());
            }
            uri.push('@');
        }

        uri.push_str(&self.hosts.join(","));

        if !self.database.is_empty() || !self.options.is_empty() {
            uri.push('/');
            uri.push_str(&self.database);
        }

        if !self.options.is_empty() {
            uri.push('?');
            uri.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(self.options.iter())
                    .finish(),
            );
        }

        uri
    }
}

fn decode(value: &str) -> Result<String, CredentialsDomainError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| CredentialsDomainError::InvalidConnectionString(e.to_string()))
}
