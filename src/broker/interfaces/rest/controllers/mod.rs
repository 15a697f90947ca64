pub mod service_broker_rest_controller;
