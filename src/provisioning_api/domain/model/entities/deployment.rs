use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Deployment {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub deployment_type: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub provision_recipe_id: String,
    #[serde(default)]
    pub ca_certificate_base64: String,
    #[serde(default)]
    pub customer_billing_code: String,
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default, rename = "connection_strings")]
    pub connection: ConnectionStrings,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConnectionStrings {
    #[serde(default)]
    pub direct: Vec<String>,
    #[serde(default)]
    pub cli: Vec<String>,
    #[serde(default)]
    pub admin: Vec<String>,
    #[serde(default)]
    pub health: Vec<String>,
}

impl Deployment {
    pub fn primary_endpoint(&self) -> Option<&str> {
        self.connection.direct.first().map(String::as_str)
    }

    pub fn has_endpoint(&self) -> bool {
        !self.connection.direct.is_empty()
    }
}
