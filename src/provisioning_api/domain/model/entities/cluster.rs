use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default, rename = "type")]
    pub cluster_type: String,
}
