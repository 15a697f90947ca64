pub mod bind_instance_command;
pub mod deprovision_instance_command;
pub mod provision_instance_command;
pub mod unbind_instance_command;
pub mod update_instance_command;
