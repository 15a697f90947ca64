pub mod bind_request_resource;
pub mod binding_resource;
pub mod broker_error_response_resource;
pub mod catalog_resource;
pub mod last_operation_resource;
pub mod lifecycle_query_resource;
pub mod operation_resource;
pub mod provision_request_resource;
pub mod update_request_resource;
