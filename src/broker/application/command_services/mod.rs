pub mod service_broker_command_service_impl;
