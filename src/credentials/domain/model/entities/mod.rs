pub mod binding_credentials;
pub mod database_user;
