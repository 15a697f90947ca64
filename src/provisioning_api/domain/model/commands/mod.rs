pub mod create_deployment_command;
pub mod create_whitelist_entry_command;
pub mod patch_deployment_command;
pub mod restore_backup_command;
pub mod scale_deployment_command;
