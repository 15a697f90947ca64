pub mod broker_settings;
pub mod last_operation;
pub mod operation_data;
pub mod provision_parameters;
