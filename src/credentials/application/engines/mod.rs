pub mod credential_engine;
pub mod document_store_credential_engine;
pub mod key_value_credential_engine;
pub mod search_credential_engine;
