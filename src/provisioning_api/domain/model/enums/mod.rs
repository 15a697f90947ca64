pub mod provisioning_api_error;
