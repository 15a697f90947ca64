use crate::config::{config_error::ConfigError, logging::LogLevel};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_PREFIX: &str = "compose-broker";
pub const DEFAULT_API_URL: &str = "https://api.compose.io/2016-07/";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub username: String,
    pub password: String,
    pub db_prefix: String,
    pub api_token: String,
    pub api_url: String,
    pub cluster_name: Option<String>,
    pub ip_whitelist: Vec<String>,
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| read(key).ok_or(ConfigError::MissingVariable(key));

        let log_level = match read("LOG_LEVEL") {
            Some(raw) => LogLevel::parse(&raw)?,
            None => LogLevel::default(),
        };

        let port = match read("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            username: require("USERNAME")?,
            password: require("PASSWORD")?,
            db_prefix: read("DB_PREFIX").unwrap_or_else(|| DEFAULT_DB_PREFIX.to_string()),
            api_token: require("ACCESS_TOKEN")?,
            api_url: read("COMPOSE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cluster_name: read("CLUSTER_NAME").map(|name| name.trim().to_string()),
            ip_whitelist: read("IP_WHITELIST")
                .map(|raw| parse_ip_whitelist(&raw))
                .unwrap_or_default(),
            log_level,
        })
    }
}

pub fn parse_ip_whitelist(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .collect()
}
