pub mod middleware;
pub mod openapi;
