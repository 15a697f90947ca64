pub mod app_config;
pub mod config_error;
pub mod logging;
