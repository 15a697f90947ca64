pub mod backup_selector;
pub mod broker_settings_resolver;
pub mod deployment_locator;
pub mod pending_rollback;
pub mod recipe_status_aggregator;
