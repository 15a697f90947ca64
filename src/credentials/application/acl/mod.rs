pub mod credential_provider_impl;
