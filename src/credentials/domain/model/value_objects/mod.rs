pub mod binding_password;
pub mod binding_username;
pub mod connection_string;
