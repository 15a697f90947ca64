pub mod service_broker_query_service_impl;
