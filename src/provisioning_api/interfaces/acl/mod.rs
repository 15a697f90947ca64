pub mod provisioning_client;
