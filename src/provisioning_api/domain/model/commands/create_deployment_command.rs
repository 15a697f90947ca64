use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct CreateDeploymentCommand {
    pub name: String,
    pub account_id: String,
    pub datacenter: String,
    #[serde(rename = "type")]
    pub database_type: String,
    pub units: u32,
    pub ssl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    pub customer_billing_code: String,
}
