pub mod broker;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod provisioning_api;
pub mod shared;
