pub mod http_provisioning_client_impl;
