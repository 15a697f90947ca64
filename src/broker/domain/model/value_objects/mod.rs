pub mod instance_name;
