pub mod acl;
pub mod engines;
