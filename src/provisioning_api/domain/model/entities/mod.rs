pub mod account;
pub mod backup;
pub mod cluster;
pub mod deployment;
pub mod recipe;
