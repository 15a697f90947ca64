mod client_tests;
mod error_payload_tests;
