pub mod credentials_domain_error;
pub mod engine_kind;
