pub mod credential_provider;
