use tracing_subscriber::EnvFilter;

use crate::config::config_error::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    #[default]
    Debug,
    Info,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "ERROR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            _ => Err(ConfigError::InvalidLogLevel(raw.to_string())),
        }
    }

    /// `tracing` has no fatal level; fatal-only logging keeps errors.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error | Self::Fatal => "error",
        }
    }
}

pub fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter())),
        )
        .with_target(false)
        .init();
}
