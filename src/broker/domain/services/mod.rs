pub mod service_broker_command_service;
pub mod service_broker_query_service;
