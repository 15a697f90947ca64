pub mod last_operation_query;
