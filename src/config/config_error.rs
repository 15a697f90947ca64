use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("please export ${0}")]
    MissingVariable(&'static str),

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("invalid port: {0}")]
    InvalidPort(String),
}
