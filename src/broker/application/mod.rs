pub mod command_services;
pub mod lifecycle;
pub mod query_services;
