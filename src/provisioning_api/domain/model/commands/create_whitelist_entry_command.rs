use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct CreateWhitelistEntryCommand {
    pub ip: String,
    pub description: String,
}

impl CreateWhitelistEntryCommand {
    pub fn for_ip(ip: &str) -> Self {
        Self {
            ip: ip.to_string(),
            description: format!("Allow {ip} to access deployment"),
        }
    }
}
