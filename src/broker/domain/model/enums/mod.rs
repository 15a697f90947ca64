pub mod broker_domain_error;
pub mod last_operation_state;
pub mod operation_type;
